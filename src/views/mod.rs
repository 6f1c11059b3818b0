//! The three views of the program.
//!
//! - `comparison_figure` (#1): tasks a, b and c, one attribute varied per plot
//! - `PhaseControlView` (#2): task d with a phase slider per term
//! - `envelope_figure` (#3): fading and growing envelope variants
//!
//! `Dashboard` owns all three for the lifetime of the window.

mod comparison;
mod dashboard;
mod envelope;
mod phase_control;

pub use comparison::comparison_figure;
pub use dashboard::Dashboard;
pub use envelope::envelope_figure;
pub use phase_control::{PhaseControlView, PhaseSlider};
