//! Presentation constants.

use crate::signals::HarmonicParams;
use std::f64::consts::PI;

/// Samples per base period used by every view.
pub const SAMPLES_PER_PERIOD: usize = 1024;

/// Titles, labels and fixed parameters of the three views.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Suptitle shared by all figures.
    pub figure_title: String,
    pub x_label: String,
    pub y_label: String,
    pub comparison_window: String,
    pub phase_control_window: String,
    pub envelope_window: String,
    /// Upper bound of each phase slider; the lower bound is 0.
    pub phase_slider_max: f64,
    /// Reference term for the fading/growing envelope view.
    pub envelope_reference: HarmonicParams,
    /// How many base periods the envelope view spans.
    pub envelope_periods: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            figure_title: "Harmonic Signals".to_string(),
            x_label: "n".to_string(),
            y_label: "x(n)".to_string(),
            comparison_window: "Harmonic Signals Modelling (#1)".to_string(),
            phase_control_window: "Harmonic Signals Modelling (#2)".to_string(),
            envelope_window: "Harmonic Signals Modelling (#3)".to_string(),
            phase_slider_max: 2.5 * PI,
            envelope_reference: HarmonicParams::new(5.0, 10.0, 0.0),
            envelope_periods: 2,
        }
    }
}
