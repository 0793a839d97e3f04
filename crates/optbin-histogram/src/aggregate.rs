//! Reducing each bin to a single statistic

use crate::partition::BinnedSums;
use optbin_core::{BinEdges, Error, Result, Sample};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How bin contents are summarised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Fraction of the total weight falling in each bin; sums to one
    #[default]
    Density,
    /// Mean of `y` within each bin, zero for empty bins
    Mean,
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::Density => write!(f, "density"),
            Aggregation::Mean => write!(f, "mean"),
        }
    }
}

impl Aggregation {
    /// Apply this aggregation to pre-computed bin sums
    pub fn apply(self, sums: &BinnedSums) -> Result<Vec<f64>> {
        match self {
            Aggregation::Density => {
                let total = sums.total_weight();
                if total <= 0.0 {
                    return Err(Error::InvalidInput(
                        "density aggregation needs a positive total weight".to_string(),
                    ));
                }
                Ok(sums.weights().iter().map(|w| w / total).collect())
            }
            Aggregation::Mean => Ok(sums
                .weights()
                .iter()
                .zip(sums.counts())
                .map(|(&w, &n)| if n > 0 { w / n as f64 } else { 0.0 })
                .collect()),
        }
    }
}

/// Per-bin statistic of `y` for a finalized edge set
///
/// The result is aligned index-for-index with the bins of `edges`.
pub fn aggregate(edges: &BinEdges, sample: &Sample<'_>, mode: Aggregation) -> Result<Vec<f64>> {
    mode.apply(&BinnedSums::from_sample(edges, sample))
}
