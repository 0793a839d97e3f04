//! Assigning observations to bins

use optbin_core::{BinEdges, Error, Result, Sample};

/// Index of the bin containing `value`, or `None` outside the edge range
///
/// Bins are `[e_i, e_{i+1})`; the final bin is closed on the right.
pub fn locate(edges: &BinEdges, value: f64) -> Option<usize> {
    if !(value >= edges.first() && value <= edges.last()) {
        return None;
    }
    // Handle last bin specially (includes right boundary)
    if value == edges.last() {
        return Some(edges.n_bins() - 1);
    }
    let upper = edges.as_slice().partition_point(|&e| e <= value);
    Some(upper - 1)
}

/// Per-bin weight sums and observation counts for one edge set
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedSums {
    weights: Vec<f64>,
    counts: Vec<usize>,
}

impl BinnedSums {
    /// Partition a sample by `edges`
    ///
    /// Observations outside `[first, last]` are ignored, matching how the
    /// bins themselves are defined.
    pub fn from_sample(edges: &BinEdges, sample: &Sample<'_>) -> Self {
        let n_bins = edges.n_bins();
        let mut weights = vec![0.0; n_bins];
        let mut counts = vec![0usize; n_bins];

        for (x, y) in sample.iter() {
            if let Some(bin) = locate(edges, x) {
                weights[bin] += y;
                counts[bin] += 1;
            }
        }

        Self { weights, counts }
    }

    /// Build directly from per-bin totals
    pub fn from_parts(weights: Vec<f64>, counts: Vec<usize>) -> Result<Self> {
        if weights.len() != counts.len() {
            return Err(Error::size_mismatch(weights.len(), counts.len(), "bin counts"));
        }
        if weights.is_empty() {
            return Err(Error::empty_input("binned sums"));
        }
        Ok(Self { weights, counts })
    }

    /// Sums for the edge set with interior edge `index` removed
    ///
    /// Bins `index - 1` and `index` are combined, mirroring
    /// [`BinEdges::without`]. Avoids re-partitioning the sample when only one
    /// boundary changes.
    pub fn merged(&self, index: usize) -> Result<Self> {
        if index == 0 || index >= self.weights.len() {
            return Err(Error::InvalidParameter(format!(
                "cannot merge at edge {index} of {} bins",
                self.weights.len()
            )));
        }

        let mut weights = Vec::with_capacity(self.weights.len() - 1);
        weights.extend_from_slice(&self.weights[..index - 1]);
        weights.push(self.weights[index - 1] + self.weights[index]);
        weights.extend_from_slice(&self.weights[index + 1..]);

        let mut counts = Vec::with_capacity(self.counts.len() - 1);
        counts.extend_from_slice(&self.counts[..index - 1]);
        counts.push(self.counts[index - 1] + self.counts[index]);
        counts.extend_from_slice(&self.counts[index + 1..]);

        Ok(Self { weights, counts })
    }

    pub fn n_bins(&self) -> usize {
        self.weights.len()
    }

    /// Sum of `y` per bin
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of observations per bin
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }
}
