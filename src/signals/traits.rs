//! Core signal traits.
//!
//! Signals here are pure functions of the sample index: evaluating one never
//! mutates it, so the same signal can be sampled any number of times and in
//! any order.

use super::SampleSequence;

/// Common interface for everything that can be evaluated at a sample index.
///
/// The trait provides two fundamental operations:
/// - Single sample evaluation via `sample()`
/// - Batch evaluation over `[0, len)` via `process()` and `sequence()`
pub trait Signal {
    /// Evaluates the signal at `index`.
    ///
    /// Signals are defined for every integer index, including negative ones.
    fn sample(&self, index: i64) -> f64;

    /// Fills `buffer` with the samples at indices `0..buffer.len()`.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&self, buffer: &mut [f64]) {
        for (index, sample) in buffer.iter_mut().enumerate() {
            *sample = self.sample(index as i64);
        }
    }

    /// Evaluates the signal over `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyharmonic::Signal;
    ///
    /// let sequence = 0.5_f64.sequence(4);
    /// assert_eq!(sequence.values(), &[0.5, 0.5, 0.5, 0.5]);
    /// ```
    fn sequence(&self, len: usize) -> SampleSequence {
        let mut values = vec![0.0; len];
        self.process(&mut values);
        SampleSequence::from(values)
    }
}

/// A signal whose index axis is scaled by `N` samples per base period.
///
/// The period length is part of the type, so signals built for different
/// period lengths cannot be summed by accident.
///
/// # Examples
///
/// ```
/// use polyharmonic::{HarmonicSignal, PeriodicSignal};
///
/// let signal = HarmonicSignal::<1024>::new(1.0, 2.0, 0.0);
/// assert_eq!(signal.samples_per_period(), 1024);
/// ```
pub trait PeriodicSignal<const N: usize>: Signal {
    /// Number of samples in one base period.
    fn samples_per_period(&self) -> usize {
        N
    }
}

/// A constant signal: every index evaluates to the same value.
impl Signal for f64 {
    fn sample(&self, _index: i64) -> f64 {
        *self
    }

    fn process(&self, buffer: &mut [f64]) {
        buffer.fill(*self);
    }
}

impl<S: Signal + ?Sized> Signal for &S {
    fn sample(&self, index: i64) -> f64 {
        (**self).sample(index)
    }
}

impl<S: Signal + ?Sized> Signal for Box<S> {
    fn sample(&self, index: i64) -> f64 {
        (**self).sample(index)
    }
}
