//! Mapping new covariate values onto a fitted partition

use optbin_core::{BinEdges, Error, Result};

/// Bin index used at inference time
///
/// Unlike [`locate`](crate::locate), this never fails: values below the first
/// edge map to bin 0 and values at or above the last edge map to the last
/// bin (constant extrapolation).
pub fn lookup_index(edges: &BinEdges, value: f64) -> usize {
    let last_bin = edges.n_bins() - 1;
    // Number of edges <= value; one past the bin that contains it
    let upper = edges.as_slice().partition_point(|&e| e <= value);
    upper.saturating_sub(1).min(last_bin)
}

/// Statistic of the bin each value falls into
///
/// The output is aligned index-for-index with `values`.
pub fn lookup(values: &[f64], edges: &BinEdges, mu: &[f64]) -> Result<Vec<f64>> {
    if mu.len() != edges.n_bins() {
        return Err(Error::size_mismatch(edges.n_bins(), mu.len(), "bin statistics"));
    }
    if values.iter().any(|v| v.is_nan()) {
        return Err(Error::non_finite("lookup values"));
    }
    Ok(values.iter().map(|&v| mu[lookup_index(edges, v)]).collect())
}
