//! Sum of harmonic terms.

use super::{HarmonicParams, HarmonicSignal, PeriodicSignal, Signal};

/// The pointwise sum of a finite, ordered list of harmonic signals.
///
/// An empty sum evaluates to `0.0` everywhere.
///
/// # Examples
///
/// ```
/// use polyharmonic::{HarmonicParams, PolyharmonicSignal, Signal};
///
/// let signal = PolyharmonicSignal::<1024>::new([
///     HarmonicParams::new(1.0, 1.0, 0.0),
///     HarmonicParams::new(0.5, 3.0, 0.0),
/// ]);
/// assert_eq!(signal.terms().len(), 2);
/// assert_eq!(signal.sample(0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyharmonicSignal<const N: usize> {
    terms: Vec<HarmonicSignal<N>>,
}

impl<const N: usize> PolyharmonicSignal<N> {
    /// Creates a polyharmonic signal with one harmonic term per parameter triple.
    pub fn new(params: impl IntoIterator<Item = HarmonicParams>) -> Self {
        params.into_iter().collect()
    }

    /// The individual harmonic terms, in summation order.
    pub fn terms(&self) -> &[HarmonicSignal<N>] {
        &self.terms
    }
}

impl<const N: usize> FromIterator<HarmonicParams> for PolyharmonicSignal<N> {
    fn from_iter<I: IntoIterator<Item = HarmonicParams>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(HarmonicSignal::from_params).collect(),
        }
    }
}

impl<const N: usize> Signal for PolyharmonicSignal<N> {
    fn sample(&self, index: i64) -> f64 {
        self.terms.iter().map(|term| term.sample(index)).sum()
    }
}

impl<const N: usize> PeriodicSignal<N> for PolyharmonicSignal<N> {}
