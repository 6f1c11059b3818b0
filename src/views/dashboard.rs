//! All views of one run.

use super::{PhaseControlView, comparison_figure, envelope_figure};
use crate::chart::Figure;
use crate::config::ViewConfig;
use crate::error::Result;
use crate::variants::Variant;
use tracing::debug;

/// Owns every view for as long as the charts are on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub comparison: Figure,
    pub phase_control: PhaseControlView,
    pub envelope: Figure,
}

impl Dashboard {
    /// Builds all three views from `variant`.
    pub fn build(variant: &Variant, config: &ViewConfig) -> Result<Self> {
        let dashboard = Self {
            comparison: comparison_figure(variant, config)?,
            phase_control: PhaseControlView::new(&variant.polyharmonic_terms()?, config),
            envelope: envelope_figure(config),
        };
        debug!("dashboard ready");
        Ok(dashboard)
    }

    /// Every figure in window order.
    pub fn figures(&self) -> [&Figure; 3] {
        [&self.comparison, self.phase_control.figure(), &self.envelope]
    }
}
