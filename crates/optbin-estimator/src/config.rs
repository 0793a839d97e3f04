//! Estimator configuration

use crate::estimator::OptimalBinner;
use optbin_core::{Error, Result, Sample};
use optbin_histogram::Aggregation;
use optbin_search::{BinMass, Strategy, MIN_MAX_BINS};
use serde::{Deserialize, Serialize};

/// How the per-bin pseudo-count `a` is chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingPrior {
    /// A fixed pseudo-count
    Fixed(f64),
    /// The mean of `y` over the training sample
    MeanOfY,
    /// `10^floor(log10(n))` for `n` observations, i.e. roughly the sample size
    SampleMagnitude,
}

impl Default for SmoothingPrior {
    fn default() -> Self {
        SmoothingPrior::Fixed(10.0)
    }
}

impl SmoothingPrior {
    /// Resolve to a concrete pseudo-count for `sample`
    pub fn resolve(&self, sample: &Sample<'_>) -> Result<f64> {
        let a = match *self {
            SmoothingPrior::Fixed(a) => a,
            SmoothingPrior::MeanOfY => sample.mean_y(),
            SmoothingPrior::SampleMagnitude => {
                let mut magnitude = 1usize;
                while magnitude.saturating_mul(10) <= sample.len() {
                    magnitude *= 10;
                }
                magnitude as f64
            }
        };
        if !a.is_finite() || a <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "smoothing prior {self:?} resolved to {a}, expected a positive value"
            )));
        }
        Ok(a)
    }
}

/// Hyperparameters of an [`OptimalBinner`]
///
/// Deserializes from partial documents; missing fields take their defaults.
///
/// ```rust
/// use optbin_estimator::{BinnerConfig, SmoothingPrior, Strategy};
///
/// let config: BinnerConfig = serde_json::from_str(
///     r#"{ "strategy": "grow_prune", "max_bins": 40, "prior": "sample_magnitude" }"#,
/// ).unwrap();
/// assert_eq!(config.strategy, Strategy::GrowPrune);
/// assert_eq!(config.prior, SmoothingPrior::SampleMagnitude);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinnerConfig {
    /// Which edge search to run
    pub strategy: Strategy,
    /// Most bins any strategy will consider (at least 3)
    pub max_bins: usize,
    /// Pseudo-count policy for the likelihood
    pub prior: SmoothingPrior,
    /// How each bin is summarised
    pub aggregation: Aggregation,
    /// What the likelihood treats as bin mass
    pub mass: BinMass,
}

impl Default for BinnerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Merge,
            max_bins: 100,
            prior: SmoothingPrior::default(),
            aggregation: Aggregation::Density,
            mass: BinMass::WeightSum,
        }
    }
}

impl BinnerConfig {
    /// Check everything that can be checked without data
    pub fn validate(&self) -> Result<()> {
        if self.max_bins < MIN_MAX_BINS {
            return Err(Error::InvalidParameter(format!(
                "max_bins must be at least {}, got {}",
                MIN_MAX_BINS,
                self.max_bins
            )));
        }
        if let SmoothingPrior::Fixed(a) = self.prior {
            if !a.is_finite() || a <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "smoothing prior must be positive and finite, got {a}"
                )));
            }
        }
        Ok(())
    }
}

/// Builder for configuring and creating an [`OptimalBinner`]
#[derive(Debug, Clone, Default)]
pub struct BinnerBuilder {
    config: BinnerConfig,
}

impl BinnerBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: BinnerConfig) -> Self {
        Self { config }
    }

    /// Sets the edge search strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Sets the bin budget.
    ///
    /// Stepwise search tries even counts below this, merge search starts from
    /// this many bins and grow-prune uses a grid of this many split points.
    pub fn max_bins(mut self, max_bins: usize) -> Self {
        self.config.max_bins = max_bins;
        self
    }

    /// Sets the smoothing prior policy.
    pub fn prior(mut self, prior: SmoothingPrior) -> Self {
        self.config.prior = prior;
        self
    }

    /// Shorthand for a fixed smoothing prior.
    pub fn smoothing(self, a: f64) -> Self {
        self.prior(SmoothingPrior::Fixed(a))
    }

    /// Sets how bins are summarised.
    pub fn aggregation(mut self, aggregation: Aggregation) -> Self {
        self.config.aggregation = aggregation;
        self
    }

    /// Sets what the likelihood counts as bin mass.
    pub fn mass(mut self, mass: BinMass) -> Self {
        self.config.mass = mass;
        self
    }

    /// Validate the configuration and create an unfitted estimator.
    pub fn build(self) -> Result<OptimalBinner> {
        self.config.validate()?;
        Ok(OptimalBinner::new(self.config))
    }
}
