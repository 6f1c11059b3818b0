//! Polyharmonic - harmonic signal modelling and visualization
//!
//! This library samples harmonic and polyharmonic signals, loads the parameter
//! variants they are built from, and describes the resulting charts for a chart
//! surface to draw.

pub mod chart;
pub mod config;
pub mod error;
pub mod phase;
pub mod signals;
pub mod surface;
pub mod variants;
pub mod views;

// Re-export commonly used types at the crate root
pub use chart::{Annotation, Figure, Plot, Series};
pub use config::{SAMPLES_PER_PERIOD, ViewConfig};
pub use error::{Error, Result};
pub use phase::{Phase, PhaseError, PhaseSpec, resolve_phase};
pub use signals::{
    Direction, HarmonicParams, HarmonicSignal, LinearlyChangingSignal, PeriodicSignal,
    PolyharmonicSignal, SampleSequence, Signal,
};
#[cfg(feature = "gui")]
pub use surface::WindowSurface;
pub use surface::{ChartSurface, LogSurface};
pub use variants::{
    Attribute, HarmonicTerm, ParameterSet, Variant, load_variants, parse_variants,
    select_variant,
};
pub use views::{Dashboard, PhaseControlView, PhaseSlider};
