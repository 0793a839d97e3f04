//! Two-phase grow-then-prune search

use crate::merge::prune;
use crate::score::Scorer;
use crate::traits::{check_max_bins, SearchOutcome, SearchStrategy};
use optbin_core::{BinEdges, Error, Result, Sample};
use ordered_float::OrderedFloat;
use std::collections::BTreeSet;
use tracing::{debug, instrument, trace};

/// Grow splits from a single bin, then prune them back
///
/// **Grow** visits a grid of `max_bins` evenly spaced points over the data
/// range once, in ascending order. A point is inserted as a new edge only if
/// that strictly improves the score of the current edge set; later points are
/// evaluated against the updated set and nothing inserted is reconsidered.
///
/// **Prune** then runs the same tie-accepting greedy removal as
/// [`MergeSearch`](crate::MergeSearch) on the grown edges, dropping splits that
/// only looked good because of the order they were added in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowPruneSearch {
    max_bins: usize,
}

impl GrowPruneSearch {
    pub fn new(max_bins: usize) -> Self {
        Self { max_bins }
    }

    /// Candidate split points, deduplicated and in visiting order
    ///
    /// Points on the outer boundary of the data are dropped since they can
    /// never separate observations.
    pub fn grid(&self, min: f64, max: f64) -> Vec<f64> {
        if self.max_bins < 2 || max <= min {
            return Vec::new();
        }
        let last = (self.max_bins - 1) as f64;
        let points: BTreeSet<OrderedFloat<f64>> = (0..self.max_bins)
            .map(|i| {
                if i == self.max_bins - 1 {
                    max
                } else {
                    min + (max - min) * (i as f64) / last
                }
            })
            .filter(|&p| p > min && p < max)
            .map(OrderedFloat)
            .collect();
        points.into_iter().map(OrderedFloat::into_inner).collect()
    }

    fn grow<S: Scorer + ?Sized>(
        &self,
        sample: &Sample<'_>,
        scorer: &S,
    ) -> Result<(BinEdges, usize)> {
        let mut current = BinEdges::equal_width(sample.min_x(), sample.max_x(), 1)?;
        let mut score = scorer.score(&current, sample);
        let mut evaluations = 1;

        for point in self.grid(sample.min_x(), sample.max_x()) {
            let Some(candidate) = current.with_edge(point) else {
                continue;
            };
            let candidate_score = scorer.score(&candidate, sample);
            evaluations += 1;
            trace!("split at {:.4} -> {}", point, candidate_score);

            if candidate_score > score {
                debug!("Splitting at {:.4}: {} -> {}", point, score, candidate_score);
                current = candidate;
                score = candidate_score;
            }
        }

        debug!("Grow phase finished with {} bins", current.n_bins());
        Ok((current, evaluations))
    }
}

impl SearchStrategy for GrowPruneSearch {
    #[instrument(skip_all, fields(max_bins = self.max_bins))]
    fn search<S: Scorer + ?Sized>(&self, sample: &Sample<'_>, scorer: &S) -> Result<SearchOutcome> {
        check_max_bins(self)?;

        let (grown, grow_evaluations) = self.grow(sample, scorer)?;
        let mut outcome = prune(grown, sample, scorer, self.name()).map_err(|e| match e {
            Error::DegenerateSearch { candidates, .. } => {
                Error::degenerate_search(self.name(), candidates + grow_evaluations)
            }
            other => other,
        })?;
        outcome.evaluations += grow_evaluations;

        debug!(
            "Grow-prune search chose {} bins (score {:.4}) after {} evaluations",
            outcome.edges.n_bins(),
            outcome.score,
            outcome.evaluations
        );
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        "grow_prune"
    }

    fn max_bins(&self) -> usize {
        self.max_bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::LogLikelihood;

    #[test]
    fn test_grid() {
        let search = GrowPruneSearch::new(4);
        assert_eq!(search.grid(0.0, 9.0), vec![3.0, 6.0]);
        assert!(search.grid(2.0, 2.0).is_empty());
        assert_eq!(GrowPruneSearch::new(3).grid(-1.0, 1.0), vec![0.0]);
    }

    #[test]
    fn test_uniform_data_stays_single_bin() {
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let y = vec![1.0; 10];
        let sample = Sample::new(&x, &y).unwrap();
        let scorer = LogLikelihood::new(10.0).unwrap();

        let outcome = GrowPruneSearch::new(4).search(&sample, &scorer).unwrap();
        assert_eq!(outcome.edges.as_slice(), &[0.0, 9.0]);
        // 1 + two grid splits, then the single prune evaluation
        assert_eq!(outcome.evaluations, 4);
    }

    #[test]
    fn test_splits_separated_clusters() {
        // Two tight clusters far apart; a split in the gap is a clear win
        let mut x: Vec<f64> = (0..50).map(|i| i as f64 * 0.01).collect();
        x.extend((0..50).map(|i| 9.5 + i as f64 * 0.01));
        let y = vec![1.0; x.len()];
        let sample = Sample::new(&x, &y).unwrap();
        let scorer = LogLikelihood::new(1.0).unwrap();

        let outcome = GrowPruneSearch::new(20).search(&sample, &scorer).unwrap();
        assert!(outcome.edges.n_bins() >= 2);
        let gap_edges = outcome
            .edges
            .as_slice()
            .iter()
            .filter(|&&e| e > 0.49 && e < 9.5)
            .count();
        assert!(gap_edges >= 1);
    }

    #[test]
    fn test_fully_degenerate_is_an_error() {
        let sample = Sample::new(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]).unwrap();
        let scorer = LogLikelihood::new(0.5).unwrap();

        let err = GrowPruneSearch::new(5).search(&sample, &scorer).unwrap_err();
        assert!(matches!(err, Error::DegenerateSearch { strategy: "grow_prune", .. }));
    }
}
