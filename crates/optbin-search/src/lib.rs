//! Bin-edge searches driven by a Bayesian-blocks log-likelihood
//!
//! This crate finds the bin edges of an adaptive histogram by maximising a
//! log-likelihood objective (Hogg 2008). All searches share one scoring
//! capability, [`Scorer`], and differ only in how they walk the space of edge
//! sets:
//!
//! - [`StepwiseSearch`]: sweep equal-width bin counts, stop at the first
//!   degenerate count
//! - [`MergeSearch`]: start fine and greedily remove the edge whose removal
//!   scores best, accepting ties
//! - [`GrowPruneSearch`]: greedily insert grid splits that strictly improve
//!   the score, then prune like [`MergeSearch`]
//!
//! None of them is exhaustive. They are hill-climbing heuristics with no
//! global optimality guarantee.
//!
//! # Scores
//!
//! A candidate is scored as [`Score::Value`] or [`Score::Degenerate`]. A
//! degenerate candidate has a bin whose mass plus prior is below one, where
//! the likelihood is undefined. `Degenerate` orders below every value, so
//! searches never prefer it over a scorable candidate. A search whose final
//! answer is still degenerate fails with
//! [`Error::DegenerateSearch`](optbin_core::Error::DegenerateSearch).
//!
//! # Example
//!
//! ```rust
//! use optbin_core::Sample;
//! use optbin_search::{LogLikelihood, MergeSearch, SearchStrategy};
//!
//! let x: Vec<f64> = (0..10).map(f64::from).collect();
//! let y = vec![1.0; 10];
//! let sample = Sample::new(&x, &y).unwrap();
//!
//! let scorer = LogLikelihood::new(10.0).unwrap();
//! let outcome = MergeSearch::new(4).search(&sample, &scorer).unwrap();
//!
//! assert!(outcome.edges.n_bins() <= 4);
//! assert_eq!(outcome.edges.first(), 0.0);
//! assert_eq!(outcome.edges.last(), 9.0);
//! ```

pub mod grow_prune;
pub mod merge;
pub mod score;
pub mod stepwise;
pub mod traits;

pub use grow_prune::GrowPruneSearch;
pub use merge::{prune, MergeSearch};
pub use score::{BinMass, LogLikelihood, Score, Scorer};
pub use stepwise::StepwiseSearch;
pub use traits::{SearchOutcome, SearchStrategy, Strategy, MIN_MAX_BINS};

pub use optbin_core::{BinEdges, Error, Result, Sample};
