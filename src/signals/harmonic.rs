//! Single harmonic (sinusoidal) term.

use super::{PeriodicSignal, Signal};
use std::f64::consts::PI;

/// Amplitude, frequency and phase of one sinusoidal term.
///
/// Frequency is measured in cycles per base period of `N` samples and phase
/// in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HarmonicParams {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl HarmonicParams {
    /// Creates a new parameter triple.
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }
}

impl From<(f64, f64, f64)> for HarmonicParams {
    fn from((amplitude, frequency, phase): (f64, f64, f64)) -> Self {
        Self::new(amplitude, frequency, phase)
    }
}

/// A harmonic signal `A·sin(2π·f·i/N + φ)`.
///
/// # Type Parameters
///
/// * `N` - Samples per base period (e.g., 1024)
///
/// Non-finite parameters are not rejected; they propagate as NaN samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicSignal<const N: usize> {
    params: HarmonicParams,
}

impl<const N: usize> HarmonicSignal<N> {
    /// Creates a new harmonic signal.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Peak amplitude
    /// * `frequency` - Cycles per `N` samples
    /// * `phase` - Phase offset in radians
    ///
    /// # Examples
    ///
    /// ```
    /// use polyharmonic::{HarmonicSignal, Signal};
    ///
    /// let signal = HarmonicSignal::<1024>::new(2.0, 1.0, 0.0);
    /// assert_eq!(signal.sample(0), 0.0);
    /// assert!((signal.sample(256) - 2.0).abs() < 1e-12);
    /// ```
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self::from_params(HarmonicParams::new(amplitude, frequency, phase))
    }

    /// Creates a harmonic signal from a parameter triple.
    pub fn from_params(params: HarmonicParams) -> Self {
        const { assert!(N > 0, "samples per period must be positive") };
        Self { params }
    }

    /// The parameters this signal was built from.
    pub fn params(&self) -> HarmonicParams {
        self.params
    }
}

impl<const N: usize> From<HarmonicParams> for HarmonicSignal<N> {
    fn from(params: HarmonicParams) -> Self {
        Self::from_params(params)
    }
}

impl<const N: usize> Signal for HarmonicSignal<N> {
    fn sample(&self, index: i64) -> f64 {
        let HarmonicParams {
            amplitude,
            frequency,
            phase,
        } = self.params;
        amplitude * (2.0 * PI * frequency * index as f64 / N as f64 + phase).sin()
    }
}

impl<const N: usize> PeriodicSignal<N> for HarmonicSignal<N> {}
