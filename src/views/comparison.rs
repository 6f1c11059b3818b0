//! View #1: harmonic signals differing in a single attribute.

use crate::chart::{Figure, Plot, Series};
use crate::config::{SAMPLES_PER_PERIOD, ViewConfig};
use crate::error::Result;
use crate::signals::{HarmonicSignal, Signal};
use crate::variants::{Attribute, HarmonicTerm, ParameterSet, Variant};
use tracing::debug;

/// Builds the three stacked comparison plots for tasks a, b and c.
pub fn comparison_figure(variant: &Variant, config: &ViewConfig) -> Result<Figure> {
    let figure = Figure::new(config.comparison_window.as_str(), config)
        .with_plot(comparison_plot(&variant.phase_comparison()?))
        .with_plot(comparison_plot(&variant.frequency_comparison()?))
        .with_plot(comparison_plot(&variant.amplitude_comparison()?));
    debug!(window = %figure.window_title, "built comparison figure");
    Ok(figure)
}

/// One plot with a labelled series per term and an info box naming the fixed
/// attributes.
fn comparison_plot(set: &ParameterSet) -> Plot {
    let mut plot = Plot::new().with_legend();
    for (index, term) in set.terms().iter().enumerate() {
        let signal = HarmonicSignal::<SAMPLES_PER_PERIOD>::from_params(term.params());
        plot = plot.with_series(Series::labelled(
            legend_label(set.varied(), index, term),
            signal.sequence(SAMPLES_PER_PERIOD),
        ));
    }
    match set.terms().last() {
        Some(term) => plot.with_annotation(fixed_summary(set.varied(), term)),
        None => plot,
    }
}

fn legend_label(varied: Attribute, index: usize, term: &HarmonicTerm) -> String {
    match varied {
        Attribute::Phase => format!("φ_{index} = {}", term.phase),
        Attribute::Frequency => format!("f_{index} = {}", term.frequency),
        Attribute::Amplitude => format!("A_{index} = {}", term.amplitude),
    }
}

fn fixed_summary(varied: Attribute, term: &HarmonicTerm) -> String {
    match varied {
        Attribute::Phase => format!("A = {}\nf = {}", term.amplitude, term.frequency),
        Attribute::Frequency => format!("A = {}\nφ = {}", term.amplitude, term.phase),
        Attribute::Amplitude => format!("φ = {}\nf = {}", term.phase, term.frequency),
    }
}
