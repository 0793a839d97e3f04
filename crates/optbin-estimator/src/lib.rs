//! Piecewise-constant estimators over likelihood-optimal bins
//!
//! [`OptimalBinner`] turns a noisy scatter of `(x, y)` pairs into an
//! adaptively binned lookup function: `fit` searches for bin edges that
//! maximise a Bayesian-blocks log-likelihood, aggregates `y` within each bin,
//! and `transform` maps new `x` values to the statistic of the bin they fall
//! into. Typical uses are empirical probability calibration (mean of 0/1
//! labels per bin) and optimal-width histograms (normalised weight per bin).
//!
//! # Examples
//!
//! ## Calibration curve
//!
//! ```rust
//! use optbin_estimator::{Aggregation, BinnerBuilder, SmoothingPrior, Strategy};
//!
//! let x: Vec<f64> = (0..200).map(|i| i as f64 / 20.0).collect();
//! let y: Vec<f64> = x.iter().map(|&v| if v > 6.0 { 1.0 } else { 0.0 }).collect();
//!
//! let mut binner = BinnerBuilder::new()
//!     .strategy(Strategy::GrowPrune)
//!     .max_bins(20)
//!     .prior(SmoothingPrior::Fixed(5.0))
//!     .aggregation(Aggregation::Mean)
//!     .build()
//!     .unwrap();
//!
//! let probabilities = binner.fit_transform(&x, &y).unwrap();
//! assert_eq!(probabilities.len(), x.len());
//! assert!(probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
//! ```
//!
//! ## Optimal-width histogram
//!
//! ```rust
//! use optbin_estimator::OptimalBinner;
//!
//! let x: Vec<f64> = (0..10).map(f64::from).collect();
//! let y = vec![1.0; 10];
//!
//! let mut binner = OptimalBinner::default();
//! let model = binner.fit(&x, &y).unwrap();
//!
//! let total: f64 = model.statistics().iter().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! for bin in model.bins() {
//!     println!("{bin}");
//! }
//! ```

pub mod config;
pub mod estimator;
pub mod model;

pub use config::{BinnerBuilder, BinnerConfig, SmoothingPrior};
pub use estimator::OptimalBinner;
pub use model::FittedModel;

pub use optbin_core::{BinEdges, Error, Result};
pub use optbin_histogram::{Aggregation, FittedBin};
pub use optbin_search::{BinMass, Strategy};
