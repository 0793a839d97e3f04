//! Fitted partitions

use crate::config::BinnerConfig;
use optbin_core::{BinEdges, Error, Result, Sample};
use optbin_histogram::{lookup, lookup_index, Aggregation, BinnedSums, FittedBin};
use optbin_search::{LogLikelihood, Strategy};
use std::fmt;
use tracing::{debug, instrument};

/// Bin edges and per-bin statistics produced by one `fit`
///
/// A model is immutable once built. Refitting produces a new model rather
/// than modifying this one.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    edges: BinEdges,
    statistics: Vec<f64>,
    bins: Vec<FittedBin>,
    score: f64,
    prior: f64,
    strategy: Strategy,
    aggregation: Aggregation,
    evaluations: usize,
}

impl FittedModel {
    /// Search for edges on `(x, y)` and aggregate `y` over them
    #[instrument(
        skip_all,
        fields(strategy = %config.strategy, max_bins = config.max_bins, n = x.len())
    )]
    pub fn fit(config: &BinnerConfig, x: &[f64], y: &[f64]) -> Result<Self> {
        config.validate()?;
        let sample = Sample::new(x, y)?;

        if config.aggregation == Aggregation::Density && sample.total_weight() <= 0.0 {
            return Err(Error::InvalidInput(
                "density aggregation needs a positive total weight".to_string(),
            ));
        }

        let prior = config.prior.resolve(&sample)?;
        let scorer = LogLikelihood::new(prior)?.with_mass(config.mass);
        let outcome = config.strategy.search(config.max_bins, &sample, &scorer)?;

        let sums = BinnedSums::from_sample(&outcome.edges, &sample);
        let statistics = config.aggregation.apply(&sums)?;
        let bins = FittedBin::collect(&outcome.edges, &sums, &statistics)?;

        debug!(
            "Fitted {} bins with a = {} (score {:.4}, {} evaluations)",
            outcome.edges.n_bins(),
            prior,
            outcome.score,
            outcome.evaluations
        );

        Ok(Self {
            edges: outcome.edges,
            statistics,
            bins,
            score: outcome.score,
            prior,
            strategy: config.strategy,
            aggregation: config.aggregation,
            evaluations: outcome.evaluations,
        })
    }

    /// Statistic of the bin each value falls into
    ///
    /// Values outside the training range take the first or last bin's
    /// statistic.
    pub fn transform(&self, x: &[f64]) -> Result<Vec<f64>> {
        lookup(x, &self.edges, &self.statistics)
    }

    /// Statistic for a single value
    pub fn predict(&self, value: f64) -> Result<f64> {
        if value.is_nan() {
            return Err(Error::non_finite("prediction input"));
        }
        Ok(self.statistics[self.bin_index(value)])
    }

    /// Bin serving `value`, clamped to the fitted range
    pub fn bin_index(&self, value: f64) -> usize {
        lookup_index(&self.edges, value)
    }

    pub fn edges(&self) -> &BinEdges {
        &self.edges
    }

    /// Per-bin statistics, aligned with the bins of [`edges`](Self::edges)
    pub fn statistics(&self) -> &[f64] {
        &self.statistics
    }

    /// Per-bin view with training counts and weights
    pub fn bins(&self) -> &[FittedBin] {
        &self.bins
    }

    pub fn n_bins(&self) -> usize {
        self.edges.n_bins()
    }

    /// Log-likelihood of the chosen edges
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Smoothing prior the search used, after resolving the policy
    pub fn prior(&self) -> f64 {
        self.prior
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Number of candidate edge sets the search scored
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

impl fmt::Display for FittedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FittedModel({} bins, {} search, {} aggregation, a={}, range=[{:.3}, {:.3}])",
            self.n_bins(),
            self.strategy,
            self.aggregation,
            self.prior,
            self.edges.first(),
            self.edges.last()
        )
    }
}
