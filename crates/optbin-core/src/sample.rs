//! Validated covariate/weight pairs

use crate::{Error, Result};

/// A borrowed sample of `(x, y)` observations
///
/// `x` is the continuous covariate being binned and `y` is the non-negative
/// weight (or 0/1 label) attached to each observation. Construction checks the
/// invariants every downstream component relies on, so scorers and
/// aggregators can assume equal lengths, at least one observation and finite
/// values.
#[derive(Debug, Clone, Copy)]
pub struct Sample<'a> {
    x: &'a [f64],
    y: &'a [f64],
    min_x: f64,
    max_x: f64,
}

impl<'a> Sample<'a> {
    /// Validate and wrap a pair of slices
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len(), "sample weights"));
        }
        if x.is_empty() {
            return Err(Error::empty_input("sample"));
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("x"));
        }
        if y.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("y"));
        }
        if let Some(w) = y.iter().find(|&&w| w < 0.0) {
            return Err(Error::InvalidInput(format!(
                "y must be non-negative, found {w}"
            )));
        }

        let (min_x, max_x) = x
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Ok(Self { x, y, min_x, max_x })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; empty samples are rejected at construction
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &'a [f64] {
        self.x
    }

    pub fn y(&self) -> &'a [f64] {
        self.y
    }

    /// Iterate over `(x, y)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f64 {
        self.y.iter().sum()
    }

    /// Mean weight
    pub fn mean_y(&self) -> f64 {
        self.total_weight() / self.len() as f64
    }

    pub fn min_y(&self) -> f64 {
        self.y.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max_y(&self) -> f64 {
        self.y.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_summary() {
        let x = [3.0, -1.0, 2.0, 7.5];
        let y = [1.0, 0.0, 0.5, 2.5];
        let sample = Sample::new(&x, &y).unwrap();

        assert_eq!(sample.len(), 4);
        assert!(!sample.is_empty());
        assert_eq!(sample.min_x(), -1.0);
        assert_eq!(sample.max_x(), 7.5);
        assert_eq!(sample.total_weight(), 4.0);
        assert_eq!(sample.mean_y(), 1.0);
        assert_eq!(sample.min_y(), 0.0);
        assert_eq!(sample.max_y(), 2.5);
        assert_eq!(sample.iter().nth(1), Some((-1.0, 0.0)));
    }

    #[test]
    fn test_sample_rejects_mismatched_lengths() {
        let err = Sample::new(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_sample_rejects_empty() {
        let err = Sample::new(&[], &[]).unwrap_err();
        assert_eq!(err, Error::InsufficientData { expected: 1, actual: 0 });
    }

    #[test]
    fn test_sample_rejects_bad_values() {
        assert!(Sample::new(&[1.0, f64::NAN], &[1.0, 1.0]).is_err());
        assert!(Sample::new(&[1.0, 2.0], &[1.0, f64::INFINITY]).is_err());
        assert!(Sample::new(&[1.0, 2.0], &[1.0, -0.5]).is_err());
    }
}
