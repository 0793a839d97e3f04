//! Partitioning, aggregation and lookup over a fixed set of bin edges
//!
//! Once a search strategy has settled on a [`BinEdges`] value, this crate
//! does everything else a piecewise-constant estimator needs:
//!
//! - **Partition**: sum weights and count observations per bin ([`BinnedSums`])
//! - **Aggregate**: reduce each bin to a single statistic ([`aggregate`])
//! - **Lookup**: map new covariate values onto those statistics ([`lookup`])
//!
//! Bins are half-open `[e_i, e_{i+1})` except the last, which also includes
//! its right edge so the maximum training value lands in a bin.
//!
//! # Examples
//!
//! ```rust
//! use optbin_core::{BinEdges, Sample};
//! use optbin_histogram::{aggregate, lookup, Aggregation};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [1.0, 1.0, 0.0, 2.0];
//! let sample = Sample::new(&x, &y).unwrap();
//! let edges = BinEdges::new(vec![0.0, 1.5, 3.0]).unwrap();
//!
//! let mu = aggregate(&edges, &sample, Aggregation::Density).unwrap();
//! assert_eq!(mu, vec![0.5, 0.5]);
//!
//! // Values outside the training range take the nearest bin's statistic
//! let out = lookup(&[-10.0, 3.0, 10.0], &edges, &mu).unwrap();
//! assert_eq!(out, vec![0.5, 0.5, 0.5]);
//! ```

pub mod aggregate;
pub mod lookup;
pub mod partition;
pub mod types;

pub use aggregate::{aggregate, Aggregation};
pub use lookup::{lookup, lookup_index};
pub use partition::{locate, BinnedSums};
pub use types::FittedBin;

pub use optbin_core::{BinEdges, Result, Sample};
