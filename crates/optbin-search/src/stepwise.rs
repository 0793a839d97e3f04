//! Equal-width bin-count sweep

use crate::score::{Score, Scorer};
use crate::traits::{check_max_bins, SearchOutcome, SearchStrategy};
use optbin_core::{BinEdges, Error, Result, Sample};
use tracing::{debug, instrument, trace};

/// Sweep equal-width histograms over an ascending grid of bin counts
///
/// Candidates are `2, 2 + step, 2 + 2·step, ...` strictly below `max_bins`.
/// The sweep assumes degeneracy is monotonic in the bin count: the first
/// degenerate candidate ends it, and the best score seen before that point
/// wins. A bin count whose edges collapse in floating point also ends the
/// sweep. Only ever produces equal-width bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepwiseSearch {
    max_bins: usize,
    step: usize,
}

impl StepwiseSearch {
    /// Sweep every second bin count below `max_bins`
    pub fn new(max_bins: usize) -> Self {
        Self { max_bins, step: 2 }
    }

    /// Sets the bin-count increment (at least 1)
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Bin counts in the order they are tried
    pub fn candidates(&self) -> impl Iterator<Item = usize> {
        (2..self.max_bins).step_by(self.step)
    }
}

impl SearchStrategy for StepwiseSearch {
    #[instrument(skip_all, fields(max_bins = self.max_bins, step = self.step))]
    fn search<S: Scorer + ?Sized>(&self, sample: &Sample<'_>, scorer: &S) -> Result<SearchOutcome> {
        check_max_bins(self)?;

        let mut best: Option<(BinEdges, f64)> = None;
        let mut evaluations = 0;

        for n_bins in self.candidates() {
            let edges = match BinEdges::equal_width(sample.min_x(), sample.max_x(), n_bins) {
                Ok(edges) => edges,
                Err(e) => {
                    debug!("{} bins cannot be represented ({}), stopping sweep", n_bins, e);
                    break;
                }
            };
            let score = scorer.score(&edges, sample);
            evaluations += 1;
            trace!("{} bins: {}", n_bins, score);

            match score {
                Score::Degenerate => {
                    debug!("{} bins is degenerate, stopping sweep", n_bins);
                    break;
                }
                Score::Value(value) => {
                    if best.as_ref().map_or(true, |(_, b)| value > *b) {
                        best = Some((edges, value));
                    }
                }
            }
        }

        let (edges, score) =
            best.ok_or_else(|| Error::degenerate_search(self.name(), evaluations))?;
        debug!(
            "Stepwise search chose {} bins (score {:.4}) after {} evaluations",
            edges.n_bins(),
            score,
            evaluations
        );

        Ok(SearchOutcome {
            edges,
            score,
            evaluations,
        })
    }

    fn name(&self) -> &'static str {
        "stepwise"
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
    fn test_candidates() {
        assert_eq!(StepwiseSearch::new(10).candidates().collect::<Vec<_>>(), vec![2, 4, 6, 8]);
        assert_eq!(StepwiseSearch::new(4).candidates().collect::<Vec<_>>(), vec![2]);
        assert_eq!(
            StepwiseSearch::new(6).with_step(1).candidates().collect::<Vec<_>>(),
            vec![2, 3, 4, 5]
        );
        assert_eq!(StepwiseSearch::new(6).with_step(0).step(), 1);
    }

    #[test]
    fn test_uniform_data_picks_two_bins() {
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let y = vec![1.0; 10];
        let sample = Sample::new(&x, &y).unwrap();
        let scorer = LogLikelihood::new(10.0).unwrap();

        let outcome = StepwiseSearch::new(4).search(&sample, &scorer).unwrap();
        assert_eq!(outcome.edges.as_slice(), &[0.0, 4.5, 9.0]);
        assert_eq!(outcome.evaluations, 1);
    }

    #[test]
    fn test_stops_at_first_degenerate() {
        // Two far-apart points: 2 bins is fine, every finer grid has empty bins
        let sample = Sample::new(&[0.0, 100.0], &[1.0, 1.0]).unwrap();
        let scorer = LogLikelihood::new(0.5).unwrap();

        let outcome = StepwiseSearch::new(20).search(&sample, &scorer).unwrap();
        assert_eq!(outcome.edges.n_bins(), 2);
        // 2 bins scored, then 4 bins hit the degenerate sentinel
        assert_eq!(outcome.evaluations, 2);
    }

    #[test]
    fn test_all_degenerate_is_an_error() {
        // Zero weight everywhere and a prior below one
        let sample = Sample::new(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]).unwrap();
        let scorer = LogLikelihood::new(0.5).unwrap();

        let err = StepwiseSearch::new(10).search(&sample, &scorer).unwrap_err();
        assert_eq!(
            err,
            Error::DegenerateSearch {
                strategy: "stepwise",
                candidates: 1
            }
        );
    }

    #[test]
    fn test_stops_when_edges_collapse() {
        // About eight representable values between min and max
        let x = [1.0e9, 1.0e9 + 1.0e-6, 1.0e9 + 5.0e-7];
        let sample = Sample::new(&x, &[1.0; 3]).unwrap();
        let scorer = LogLikelihood::new(10.0).unwrap();

        let outcome = StepwiseSearch::new(100).search(&sample, &scorer).unwrap();
        assert!(outcome.evaluations < StepwiseSearch::new(100).candidates().count());
        assert_eq!(outcome.edges.first(), sample.min_x());
        assert_eq!(outcome.edges.last(), sample.max_x());
    }

    #[test]
    fn test_rejects_small_budget() {
        let sample = Sample::new(&[0.0, 1.0], &[1.0, 1.0]).unwrap();
        let scorer = LogLikelihood::new(1.0).unwrap();
        assert!(StepwiseSearch::new(2).search(&sample, &scorer).is_err());
    }
}
