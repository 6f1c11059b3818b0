//! View #2: a polyharmonic signal with one phase slider per term.

use crate::chart::{Figure, Plot, Series};
use crate::config::{SAMPLES_PER_PERIOD, ViewConfig};
use crate::signals::{HarmonicParams, PolyharmonicSignal, Signal};
use crate::variants::HarmonicTerm;
use std::ops::RangeInclusive;
use tracing::{debug, trace};

/// State of one phase slider.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSlider {
    /// Caption naming the term's frequency, e.g. `f=3`.
    pub label: String,
    pub value: f64,
    pub initial: f64,
    pub range: RangeInclusive<f64>,
}

impl PhaseSlider {
    /// Value text in the form `φ=1.57`.
    pub fn value_text(value: f64) -> String {
        format!("φ={value:.2}")
    }
}

/// Interactive view over the task-d terms.
///
/// The view owns its slider state. Every change recomputes the summed signal
/// and overwrites the single drawn series; nothing is cached between updates.
///
/// # Examples
///
/// ```
/// use polyharmonic::{HarmonicTerm, Phase, PhaseControlView, ViewConfig};
///
/// let terms = vec![
///     HarmonicTerm { amplitude: 1.0, frequency: 1.0, phase: Phase::from_radians(0.0) },
///     HarmonicTerm { amplitude: 2.0, frequency: 3.0, phase: Phase::from_radians(1.0) },
/// ];
/// let mut view = PhaseControlView::new(&terms, &ViewConfig::default());
/// assert_eq!(view.sliders().len(), 2);
///
/// view.set_phases(&[0.5, 0.5]);
/// assert_eq!(view.phases(), vec![0.5, 0.5]);
/// view.reset();
/// assert_eq!(view.phases(), vec![0.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseControlView {
    terms: Vec<HarmonicParams>,
    sliders: Vec<PhaseSlider>,
    figure: Figure,
}

impl PhaseControlView {
    pub fn new(terms: &[HarmonicTerm], config: &ViewConfig) -> Self {
        let range = 0.0..=config.phase_slider_max;
        let sliders = terms
            .iter()
            .map(|term| PhaseSlider {
                label: format!("f={}", term.frequency),
                value: term.phase.radians(),
                initial: term.phase.radians(),
                range: range.clone(),
            })
            .collect();
        let mut view = Self {
            terms: terms.iter().map(HarmonicTerm::params).collect(),
            sliders,
            figure: Figure::new(config.phase_control_window.as_str(), config)
                .with_plot(Plot::new().with_series(Series::new(Default::default()))),
        };
        view.redraw();
        debug!(
            window = %view.figure.window_title,
            sliders = view.sliders.len(),
            "built phase control view"
        );
        view
    }

    pub fn sliders(&self) -> &[PhaseSlider] {
        &self.sliders
    }

    /// Current phase of every term, in slider order.
    pub fn phases(&self) -> Vec<f64> {
        self.sliders.iter().map(|slider| slider.value).collect()
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// The summed waveform as currently drawn.
    pub fn series(&self) -> &Series {
        &self.figure.plots[0].series[0]
    }

    /// The signal for the current slider values.
    pub fn signal(&self) -> PolyharmonicSignal<SAMPLES_PER_PERIOD> {
        self.terms.iter().copied().collect()
    }

    /// Applies new slider values and redraws.
    ///
    /// Values are clamped to each slider's range. Extra values are ignored and
    /// missing ones leave their sliders unchanged.
    pub fn set_phases(&mut self, values: &[f64]) -> &Series {
        for ((slider, term), &value) in self.sliders.iter_mut().zip(&mut self.terms).zip(values) {
            let value = value.clamp(*slider.range.start(), *slider.range.end());
            slider.value = value;
            term.phase = value;
        }
        trace!(phases = ?values, "phase sliders changed");
        self.redraw();
        self.series()
    }

    /// Restores every slider to its initial phase and redraws.
    pub fn reset(&mut self) -> &Series {
        for (slider, term) in self.sliders.iter_mut().zip(&mut self.terms) {
            slider.value = slider.initial;
            term.phase = slider.initial;
        }
        trace!("phase sliders reset");
        self.redraw();
        self.series()
    }

    fn redraw(&mut self) {
        let data = self.signal().sequence(SAMPLES_PER_PERIOD);
        self.figure.plots[0].series[0].data = data;
    }
}
