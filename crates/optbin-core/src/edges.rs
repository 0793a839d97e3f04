//! Immutable bin edge sets

use crate::{Error, Result};
use std::fmt;

/// A strictly increasing sequence of bin boundaries
///
/// `n + 1` edges define `n` bins `[e_i, e_{i+1})`, with the last bin closed on
/// the right. There are always at least two edges (one bin).
///
/// Edge sets are values: [`without`](Self::without) and
/// [`with_edge`](Self::with_edge) return new sets and leave `self` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BinEdges {
    edges: Vec<f64>,
}

impl BinEdges {
    /// Validate and wrap a vector of edges
    pub fn new(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: edges.len(),
            });
        }
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(Error::non_finite("bin edges"));
        }
        if let Some(w) = edges.windows(2).find(|w| w[1] <= w[0]) {
            return Err(Error::InvalidInput(format!(
                "bin edges must be strictly increasing, found {} followed by {}",
                w[0], w[1]
            )));
        }
        Ok(Self { edges })
    }

    /// `n_bins` equal-width bins spanning `[min, max]`
    ///
    /// The last edge is exactly `max`. A zero-width range is widened to
    /// `[min - 0.5, max + 0.5]`. Fails with `InvalidInput` when the range is
    /// too narrow for its magnitude to hold `n_bins` distinct edges.
    pub fn equal_width(min: f64, max: f64, n_bins: usize) -> Result<Self> {
        if n_bins == 0 {
            return Err(Error::InvalidParameter(
                "number of bins must be positive".to_string(),
            ));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("histogram range"));
        }
        if max < min {
            return Err(Error::InvalidParameter(format!(
                "histogram range is inverted: [{min}, {max}]"
            )));
        }

        let (lo, hi) = if max == min {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };

        let n = n_bins as f64;
        let span = hi - lo;
        let mut edges: Vec<f64> = if span.is_finite() {
            (0..n_bins).map(|i| lo + span * (i as f64) / n).collect()
        } else {
            // Span overflows near the ends of the f64 range
            let step = hi / n - lo / n;
            (0..n_bins).map(|i| lo + step * (i as f64)).collect()
        };
        edges.push(hi);

        Self::new(edges)
    }

    /// Number of bins
    pub fn n_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always false; an edge set holds at least two edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.edges
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.edges
    }

    pub fn first(&self) -> f64 {
        self.edges[0]
    }

    pub fn last(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Bin widths `e_{i+1} - e_i`
    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.windows(2).map(|w| w[1] - w[0])
    }

    /// Indices of the removable (non-boundary) edges
    pub fn interior_indices(&self) -> std::ops::Range<usize> {
        1..self.edges.len() - 1
    }

    /// True if `value` is exactly one of the edges
    pub fn contains_edge(&self, value: f64) -> bool {
        self.edges
            .binary_search_by(|e| e.total_cmp(&value))
            .is_ok()
    }

    /// Copy of this edge set with interior edge `index` removed
    ///
    /// Merges bins `index - 1` and `index`.
    pub fn without(&self, index: usize) -> Result<Self> {
        if !self.interior_indices().contains(&index) {
            return Err(Error::InvalidParameter(format!(
                "edge {index} is not an interior edge of a {}-edge set",
                self.edges.len()
            )));
        }
        let mut edges = Vec::with_capacity(self.edges.len() - 1);
        edges.extend_from_slice(&self.edges[..index]);
        edges.extend_from_slice(&self.edges[index + 1..]);
        Ok(Self { edges })
    }

    /// Copy of this edge set with `value` inserted at its sorted position
    ///
    /// Returns `None` when `value` is already an edge or falls outside the
    /// outer edges, since neither would add a bin.
    pub fn with_edge(&self, value: f64) -> Option<Self> {
        if !value.is_finite() || value <= self.first() || value >= self.last() {
            return None;
        }
        let pos = self.edges.partition_point(|&e| e < value);
        if self.edges[pos] == value {
            return None;
        }
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges[..pos]);
        edges.push(value);
        edges.extend_from_slice(&self.edges[pos..]);
        Some(Self { edges })
    }
}

impl AsRef<[f64]> for BinEdges {
    fn as_ref(&self) -> &[f64] {
        &self.edges
    }
}

impl fmt::Display for BinEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e:.3}")?;
        }
        write!(f, "]")
    }
}
