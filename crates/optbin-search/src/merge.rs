//! Bottom-up agglomerative merging

use crate::score::{Score, Scorer};
use crate::traits::{check_max_bins, SearchOutcome, SearchStrategy};
use optbin_core::{BinEdges, Error, Result, Sample};
use optbin_histogram::BinnedSums;
use tracing::{debug, instrument, trace};

/// Greedy agglomeration starting from `max_bins` equal-width bins
///
/// When the data range is too narrow for its magnitude to hold `max_bins`
/// distinct edges, the search starts from the finest equal-width grid that
/// can be represented instead.
///
/// Each round scores every single-edge removal and commits the best one if it
/// scores at least as well as the current edge set (ties are accepted). The
/// search stops when the best removal would lower the score or when only one
/// bin is left. `O(max_bins²)` scorer evaluations in the worst case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSearch {
    max_bins: usize,
}

impl MergeSearch {
    pub fn new(max_bins: usize) -> Self {
        Self { max_bins }
    }

    /// Finest equal-width grid of at most `max_bins` bins over the sample
    pub fn starting_edges(&self, sample: &Sample<'_>) -> Result<BinEdges> {
        let mut last_error = None;
        for n_bins in (1..=self.max_bins).rev() {
            match BinEdges::equal_width(sample.min_x(), sample.max_x(), n_bins) {
                Ok(edges) => {
                    if n_bins < self.max_bins {
                        debug!(
                            "Range [{}, {}] only holds {} equal-width bins",
                            sample.min_x(),
                            sample.max_x(),
                            n_bins
                        );
                    }
                    return Ok(edges);
                }
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| {
            Error::InvalidParameter("merge search needs at least one bin".to_string())
        }))
    }
}

impl SearchStrategy for MergeSearch {
    #[instrument(skip_all, fields(max_bins = self.max_bins))]
    fn search<S: Scorer + ?Sized>(&self, sample: &Sample<'_>, scorer: &S) -> Result<SearchOutcome> {
        check_max_bins(self)?;
        let start = self.starting_edges(sample)?;
        prune(start, sample, scorer, self.name())
    }

    fn name(&self) -> &'static str {
        "merge"
    }

    fn max_bins(&self) -> usize {
        self.max_bins
    }
}

/// Greedily remove interior edges from `edges` while the score does not drop
///
/// This is the procedure behind [`MergeSearch`] and the second phase of
/// [`GrowPruneSearch`](crate::GrowPruneSearch). `strategy` names the caller in
/// the error returned when the final edge set is still degenerate.
///
/// Every committed round removes exactly one edge, so at most
/// `edges.len() - 2` rounds run even though ties are accepted.
pub fn prune<S: Scorer + ?Sized>(
    edges: BinEdges,
    sample: &Sample<'_>,
    scorer: &S,
    strategy: &'static str,
) -> Result<SearchOutcome> {
    let max_rounds = edges.len().saturating_sub(2);
    let mut sums = BinnedSums::from_sample(&edges, sample);
    let mut score = scorer.score_binned(&edges, &sums);
    let mut current = edges;
    let mut evaluations = 1;

    for round in 0..max_rounds {
        let mut best: Option<(usize, Score)> = None;
        for index in current.interior_indices() {
            let candidate = scorer.score_binned(&current.without(index)?, &sums.merged(index)?);
            evaluations += 1;
            trace!("round {}: without edge {} -> {}", round, index, candidate);

            if best.map_or(true, |(_, b)| candidate > b) {
                best = Some((index, candidate));
            }
        }

        let Some((index, candidate)) = best else {
            break;
        };
        if candidate < score {
            break;
        }

        debug!(
            "Merging at edge {:.4}: {} -> {} ({} bins left)",
            current.as_slice()[index],
            score,
            candidate,
            current.n_bins() - 1
        );
        current = current.without(index)?;
        sums = sums.merged(index)?;
        score = candidate;
    }

    match score {
        Score::Value(value) => Ok(SearchOutcome {
            edges: current,
            score: value,
            evaluations,
        }),
        Score::Degenerate => Err(Error::degenerate_search(strategy, evaluations)),
    }
}
