//! The fit/transform estimator

use crate::config::BinnerConfig;
use crate::model::FittedModel;
use optbin_core::{Error, Result};

/// Adaptive-binning estimator with a scikit-style fit/transform surface
///
/// An `OptimalBinner` is either unfitted or holds exactly one
/// [`FittedModel`]. `fit` is the only way to set the model, and a successful
/// `fit` replaces any previous model wholesale. A failed `fit` leaves the
/// estimator as it was.
#[derive(Debug, Clone, Default)]
pub struct OptimalBinner {
    config: BinnerConfig,
    model: Option<FittedModel>,
}

impl OptimalBinner {
    /// Create an unfitted estimator
    ///
    /// The configuration is validated when `fit` runs; use
    /// [`BinnerBuilder`](crate::BinnerBuilder) to validate up front.
    pub fn new(config: BinnerConfig) -> Self {
        Self {
            config,
            model: None,
        }
    }

    pub fn config(&self) -> &BinnerConfig {
        &self.config
    }

    /// Fit bins to `(x, y)`
    ///
    /// Requires `x.len() == y.len() > 0`, finite values and non-negative `y`.
    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<&FittedModel> {
        let model = FittedModel::fit(&self.config, x, y)?;
        Ok(&*self.model.insert(model))
    }

    /// Map each value to its bin's statistic
    ///
    /// Fails with [`Error::NotFitted`] before the first successful `fit`.
    pub fn transform(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.model.as_ref().ok_or(Error::NotFitted)?.transform(x)
    }

    /// `fit` followed by `transform` on the training covariate
    pub fn fit_transform(&mut self, x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
        self.fit(x, y)?;
        self.transform(x)
    }

    /// The fitted model, if any
    pub fn model(&self) -> Option<&FittedModel> {
        self.model.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }
}
