//! Evaluated sample runs.

/// Amplitudes of a signal evaluated over a contiguous index range starting at 0.
///
/// The index of each value is its position, so the sequence can be read either
/// as plain amplitudes or as `(index, amplitude)` points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSequence {
    values: Vec<f64>,
}

impl SampleSequence {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sequence holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Amplitudes in index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Amplitude at `index`, if it lies inside the sequence.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Iterates over `(index, amplitude)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyharmonic::SampleSequence;
    ///
    /// let sequence = SampleSequence::from(vec![0.5, -0.5]);
    /// let points: Vec<_> = sequence.points().collect();
    /// assert_eq!(points, vec![(0, 0.5), (1, -0.5)]);
    /// ```
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values.iter().copied().enumerate()
    }

    /// Smallest amplitude, ignoring NaN. `None` for an empty sequence.
    pub fn min(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|value| !value.is_nan())
            .reduce(f64::min)
    }

    /// Largest amplitude, ignoring NaN. `None` for an empty sequence.
    pub fn max(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|value| !value.is_nan())
            .reduce(f64::max)
    }
}

impl From<Vec<f64>> for SampleSequence {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_are_indexed_from_zero() {
        let sequence = SampleSequence::from(vec![3.0, 2.0, 1.0]);
        let indices: Vec<usize> = sequence.points().map(|(index, _)| index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_min_max() {
        let sequence = SampleSequence::from(vec![0.5, -2.0, f64::NAN, 4.0]);
        assert_eq!(sequence.min(), Some(-2.0));
        assert_eq!(sequence.max(), Some(4.0));
    }

    #[test]
    fn test_empty() {
        let sequence = SampleSequence::default();
        assert!(sequence.is_empty());
        assert_eq!(sequence.min(), None);
        assert_eq!(sequence.get(0), None);
    }
}
