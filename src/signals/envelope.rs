//! Harmonic term with a linearly fading or growing envelope.
//!
//! Within every period of `N` samples a step value runs linearly down from `N`
//! to `1` (fading) or up from `0` to `N - 1` (growing). Amplitude, frequency and
//! phase are each scaled as `r · (r · 0.2 / N) · step`, and the harmonic built
//! from the scaled values is evaluated at index `step` rather than at the
//! original index. The envelope therefore repeats every `N` samples.

use super::{HarmonicParams, HarmonicSignal, PeriodicSignal, Signal};

/// Direction in which the envelope moves within each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Step runs from `N` down to `1`.
    #[default]
    Fading,
    /// Step runs from `0` up to `N - 1`.
    Growing,
}

/// A harmonic signal whose parameters follow a per-period linear step.
///
/// # Examples
///
/// ```
/// use polyharmonic::{Direction, HarmonicParams, LinearlyChangingSignal};
///
/// let fading = LinearlyChangingSignal::<1024>::new(
///     HarmonicParams::new(5.0, 10.0, 0.0),
///     Direction::Fading,
/// );
/// assert_eq!(fading.step(0), 1024);
/// assert_eq!(fading.step(1), 1023);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearlyChangingSignal<const N: usize> {
    reference: HarmonicParams,
    direction: Direction,
}

impl<const N: usize> LinearlyChangingSignal<N> {
    /// Creates a new envelope signal around `reference`.
    pub fn new(reference: HarmonicParams, direction: Direction) -> Self {
        const { assert!(N > 0, "samples per period must be positive") };
        Self {
            reference,
            direction,
        }
    }

    /// Shorthand for a fading signal.
    pub fn fading(reference: HarmonicParams) -> Self {
        Self::new(reference, Direction::Fading)
    }

    /// Shorthand for a growing signal.
    pub fn growing(reference: HarmonicParams) -> Self {
        Self::new(reference, Direction::Growing)
    }

    pub fn reference(&self) -> HarmonicParams {
        self.reference
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Step value at `index`: in `[1, N]` when fading, `[0, N - 1]` when growing.
    pub fn step(&self, index: i64) -> i64 {
        let period = N as i64;
        let position = index.rem_euclid(period);
        match self.direction {
            Direction::Fading => period - position,
            Direction::Growing => position,
        }
    }

    /// Scaled harmonic parameters in effect at `index`.
    pub fn envelope(&self, index: i64) -> HarmonicParams {
        let step = self.step(index) as f64;
        let scale = |reference: f64| reference * (reference * 0.2 / N as f64) * step;
        HarmonicParams::new(
            scale(self.reference.amplitude),
            scale(self.reference.frequency),
            scale(self.reference.phase),
        )
    }
}

impl<const N: usize> Signal for LinearlyChangingSignal<N> {
    fn sample(&self, index: i64) -> f64 {
        HarmonicSignal::<N>::from_params(self.envelope(index)).sample(self.step(index))
    }
}

impl<const N: usize> PeriodicSignal<N> for LinearlyChangingSignal<N> {}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;
    const REFERENCE: HarmonicParams = HarmonicParams {
        amplitude: 5.0,
        frequency: 10.0,
        phase: 0.0,
    };

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_step_boundaries() {
        let fading = LinearlyChangingSignal::<1024>::fading(REFERENCE);
        let growing = LinearlyChangingSignal::<1024>::growing(REFERENCE);

        assert_eq!(fading.step(0), 1024);
        assert_eq!(growing.step(0), 0);
        assert_eq!(fading.step(1023), 1);
        assert_eq!(growing.step(1023), 1023);

        // resets every period
        assert_eq!(fading.step(1024), 1024);
        assert_eq!(growing.step(1024), 0);
        assert_eq!(fading.step(2048), 1024);
    }

    #[test]
    fn test_step_with_negative_index_stays_in_range() {
        let fading = LinearlyChangingSignal::<1024>::fading(REFERENCE);
        let growing = LinearlyChangingSignal::<1024>::growing(REFERENCE);
        assert_eq!(growing.step(-1), 1023);
        assert_eq!(fading.step(-1), 1);
    }

    #[test]
    fn test_periodic_over_n() {
        for signal in [
            LinearlyChangingSignal::<1024>::fading(REFERENCE),
            LinearlyChangingSignal::<1024>::growing(REFERENCE),
        ] {
            for index in [0, 1, 77, 512, 1023] {
                assert_eq!(signal.sample(index), signal.sample(index + 1024));
            }
        }
    }

    #[test]
    fn test_envelope_is_reference_squared_scaled() {
        let fading = LinearlyChangingSignal::<1024>::fading(REFERENCE);
        // step = 1024 at index 0, so each parameter becomes r * r * 0.2
        let envelope = fading.envelope(0);
        assert!(approx_eq(envelope.amplitude, 5.0 * 5.0 * 0.2));
        assert!(approx_eq(envelope.frequency, 10.0 * 10.0 * 0.2));
        assert_eq!(envelope.phase, 0.0);
    }

    #[test]
    fn test_sample_matches_formula() {
        let signal = LinearlyChangingSignal::<1024>::growing(REFERENCE);
        for index in [0_i64, 1, 10, 333, 1000, 1500] {
            let step = (index % 1024) as f64;
            let amplitude = 5.0 * (5.0 * 0.2 / 1024.0) * step;
            let frequency = 10.0 * (10.0 * 0.2 / 1024.0) * step;
            let expected = amplitude
                * (2.0 * std::f64::consts::PI * frequency * step / 1024.0).sin();
            assert!(approx_eq(signal.sample(index), expected), "i = {index}");
        }
    }

    #[test]
    fn test_growing_starts_silent() {
        let growing = LinearlyChangingSignal::<1024>::growing(REFERENCE);
        assert_eq!(growing.sample(0), 0.0);
        assert_eq!(growing.sample(1024), 0.0);
    }
}
