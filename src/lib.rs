//! Likelihood-optimal adaptive histogram binning
//!
//! `optbin` fits a piecewise-constant estimator to `(x, y)` pairs: it
//! partitions the covariate `x` into bins chosen to maximise a
//! Bayesian-blocks log-likelihood (Hogg 2008), summarises `y` in each bin,
//! and maps new `x` values to their bin's statistic.
//!
//! This crate re-exports the workspace:
//!
//! - [`types`]: errors, validated samples and bin edge sets
//! - [`histogram`]: partitioning, aggregation and lookup
//! - [`search`]: the scorer and the stepwise, merge and grow-prune searches
//! - [`estimator`]: the configurable fit/transform estimator
//!
//! # Example
//!
//! ```rust
//! use optbin::{Aggregation, BinnerBuilder, Strategy};
//!
//! let x: Vec<f64> = (0..10).map(f64::from).collect();
//! let y = vec![1.0; 10];
//!
//! let mut binner = BinnerBuilder::new()
//!     .strategy(Strategy::Merge)
//!     .max_bins(4)
//!     .smoothing(10.0)
//!     .aggregation(Aggregation::Density)
//!     .build()
//!     .unwrap();
//!
//! binner.fit(&x, &y).unwrap();
//! let mu = binner.transform(&[-5.0, 0.0, 9.0, 100.0]).unwrap();
//! assert_eq!(mu[0], mu[1]);
//! assert_eq!(mu[2], mu[3]);
//! ```

pub use optbin_core as types;
pub use optbin_estimator as estimator;
pub use optbin_histogram as histogram;
pub use optbin_search as search;

pub use optbin_core::{BinEdges, Error, Result, Sample};
pub use optbin_estimator::{BinnerBuilder, BinnerConfig, FittedModel, OptimalBinner, SmoothingPrior};
pub use optbin_histogram::{Aggregation, FittedBin};
pub use optbin_search::{
    BinMass, GrowPruneSearch, LogLikelihood, MergeSearch, Score, Scorer, SearchOutcome,
    SearchStrategy, StepwiseSearch, Strategy,
};
