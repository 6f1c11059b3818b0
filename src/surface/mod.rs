//! Chart surfaces: whatever actually puts a `Dashboard` on screen.
//!
//! - `WindowSurface` (feature `gui`) opens a native window with `egui_plot`
//! - `LogSurface` reports the figures through `tracing` without drawing

#[cfg(feature = "gui")]
mod window;

#[cfg(feature = "gui")]
pub use window::WindowSurface;

use crate::error::Result;
use crate::views::{Dashboard, PhaseSlider};
use tracing::info;

/// The boundary to an external charting facility.
///
/// A surface takes ownership of the dashboard and keeps it alive for as long
/// as the charts are shown. Interactive surfaces drive the dashboard's phase
/// control view from their own event loop.
pub trait ChartSurface {
    /// Shows the dashboard, returning once the user closes it.
    fn present(&mut self, dashboard: Dashboard) -> Result<()>;
}

/// Headless surface that logs the shape of every figure.
#[derive(Debug, Default)]
pub struct LogSurface;

impl ChartSurface for LogSurface {
    fn present(&mut self, dashboard: Dashboard) -> Result<()> {
        for figure in dashboard.figures() {
            for (index, plot) in figure.plots.iter().enumerate() {
                let samples = plot.series.first().map_or(0, |series| series.data.len());
                info!(
                    window = %figure.window_title,
                    plot = index,
                    series = plot.series.len(),
                    samples,
                    "figure plot"
                );
            }
        }
        for slider in dashboard.phase_control.sliders() {
            info!(
                slider = %slider.label,
                value = %PhaseSlider::value_text(slider.value),
                "phase slider"
            );
        }
        Ok(())
    }
}
