//! Core types for likelihood-optimal histogram binning
//!
//! This crate holds the pieces every other `optbin` crate agrees on:
//!
//! - [`Error`] and the [`Result`] alias used throughout the workspace
//! - [`Sample`], a validated pair of covariate and weight slices
//! - [`BinEdges`], an immutable strictly increasing edge set
//!
//! Search strategies never mutate an edge set in place. Every candidate is a
//! fresh [`BinEdges`] value derived from the current one, which keeps greedy
//! searches easy to reason about and to test.
//!
//! # Example
//!
//! ```rust
//! use optbin_core::{BinEdges, Sample};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [1.0, 0.0, 1.0, 1.0];
//! let sample = Sample::new(&x, &y).unwrap();
//!
//! let edges = BinEdges::equal_width(sample.min_x(), sample.max_x(), 3).unwrap();
//! assert_eq!(edges.n_bins(), 3);
//! assert_eq!(edges.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
//! ```

pub mod edges;
pub mod error;
pub mod sample;

pub use edges::BinEdges;
pub use error::{Error, Result};
pub use sample::Sample;
