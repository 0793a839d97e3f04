//! Per-bin view of a fitted partition

use crate::partition::BinnedSums;
use optbin_core::{BinEdges, Error, Result};
use std::fmt;

/// A single bin of a fitted partition
#[derive(Debug, Clone, PartialEq)]
pub struct FittedBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of training observations in this bin
    pub count: usize,
    /// Sum of training weights in this bin
    pub weight: f64,
    /// Aggregated statistic served for this bin
    pub statistic: f64,
    /// Whether `right` belongs to the bin (true only for the last bin)
    pub closed_right: bool,
}

impl FittedBin {
    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left
            && (value < self.right || (self.closed_right && value == self.right))
    }

    /// Zip edges, training sums and statistics into bins
    pub fn collect(edges: &BinEdges, sums: &BinnedSums, mu: &[f64]) -> Result<Vec<FittedBin>> {
        if sums.n_bins() != edges.n_bins() {
            return Err(Error::size_mismatch(edges.n_bins(), sums.n_bins(), "bin sums"));
        }
        if mu.len() != edges.n_bins() {
            return Err(Error::size_mismatch(edges.n_bins(), mu.len(), "bin statistics"));
        }

        let last = edges.n_bins() - 1;
        Ok(edges
            .as_slice()
            .windows(2)
            .zip(sums.weights().iter().zip(sums.counts()))
            .zip(mu)
            .enumerate()
            .map(|(i, ((w, (&weight, &count)), &statistic))| FittedBin {
                left: w[0],
                right: w[1],
                count,
                weight,
                statistic,
                closed_right: i == last,
            })
            .collect())
    }
}

impl fmt::Display for FittedBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.closed_right { ']' } else { ')' };
        write!(
            f,
            "[{:.3}, {:.3}{}: count={}, weight={:.3}, mu={:.4}",
            self.left, self.right, close, self.count, self.weight, self.statistic
        )
    }
}
