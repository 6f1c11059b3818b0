//! Signal types and traits.
//!
//! This module provides the sampled-waveform abstractions used throughout
//! the crate, including:
//! - `Signal` trait for anything that can be evaluated at a sample index
//! - `PeriodicSignal` trait for signals scaled by a fixed period length `N`
//! - `HarmonicSignal` for a single sinusoid
//! - `PolyharmonicSignal` for a sum of sinusoids
//! - `LinearlyChangingSignal` for the fading/growing envelope term
//! - `SampleSequence` for an evaluated run of samples

mod envelope;
mod harmonic;
mod polyharmonic;
mod sequence;
mod traits;

pub use envelope::{Direction, LinearlyChangingSignal};
pub use harmonic::{HarmonicParams, HarmonicSignal};
pub use polyharmonic::PolyharmonicSignal;
pub use sequence::SampleSequence;
pub use traits::{PeriodicSignal, Signal};
