//! Scoring candidate edge sets

use optbin_core::{BinEdges, Error, Result, Sample};
use optbin_histogram::BinnedSums;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score of one candidate edge set
///
/// Variant order matters: the derived ordering puts `Degenerate` below every
/// `Value`, and two degenerate scores compare equal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Score {
    /// The likelihood is undefined for this candidate
    Degenerate,
    /// A finite log-likelihood
    Value(f64),
}

impl Score {
    /// Wrap a computed value, collapsing NaN and infinities to `Degenerate`
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Score::Value(value)
        } else {
            Score::Degenerate
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Score::Value(v) => Some(v),
            Score::Degenerate => None,
        }
    }

    pub fn is_degenerate(self) -> bool {
        matches!(self, Score::Degenerate)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Value(v) => write!(f, "{v:.6}"),
            Score::Degenerate => write!(f, "degenerate"),
        }
    }
}

/// Objective shared by every search strategy
///
/// Searches only ever talk to this trait, so an alternative objective can be
/// swapped in without touching search logic.
pub trait Scorer {
    /// Score `edges` given the sample already partitioned into `sums`
    ///
    /// `sums` must have been built from the same edges.
    fn score_binned(&self, edges: &BinEdges, sums: &BinnedSums) -> Score;

    /// Partition the sample by `edges` and score the result
    fn score(&self, edges: &BinEdges, sample: &Sample<'_>) -> Score {
        self.score_binned(edges, &BinnedSums::from_sample(edges, sample))
    }

    /// Get the name of the objective
    fn name(&self) -> &'static str;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score_binned(&self, edges: &BinEdges, sums: &BinnedSums) -> Score {
        (**self).score_binned(edges, sums)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// What counts as a bin's mass `N_i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinMass {
    /// Sum of `y` over the bin
    #[default]
    WeightSum,
    /// Number of observations in the bin, ignoring `y`
    Count,
}

impl BinMass {
    fn of(self, sums: &BinnedSums, bin: usize) -> f64 {
        match self {
            BinMass::WeightSum => sums.weights()[bin],
            BinMass::Count => sums.counts()[bin] as f64,
        }
    }
}

/// Bayesian-blocks histogram log-likelihood (Hogg 2008)
///
/// With bin masses `N_i`, widths `d_i`, prior `a` and `s = Σ (N_i + a)`:
///
/// ```text
/// L = Σ N_i · ln( (N_i + a - 1) / (d_i · (s - 1)) )
/// ```
///
/// Larger `a` penalises finely divided, low-mass bins. Any bin with
/// `N_i + a < 1` makes the candidate degenerate. Empty bins contribute zero,
/// the limit of `N ln(...)` as `N → 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLikelihood {
    prior: f64,
    mass: BinMass,
}

impl LogLikelihood {
    /// Create a scorer with pseudo-count `prior` per bin
    pub fn new(prior: f64) -> Result<Self> {
        if !prior.is_finite() || prior <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "smoothing prior must be positive and finite, got {prior}"
            )));
        }
        Ok(Self {
            prior,
            mass: BinMass::default(),
        })
    }

    /// Choose how bin mass is measured
    pub fn with_mass(mut self, mass: BinMass) -> Self {
        self.mass = mass;
        self
    }

    pub fn prior(&self) -> f64 {
        self.prior
    }

    pub fn mass(&self) -> BinMass {
        self.mass
    }
}

impl Scorer for LogLikelihood {
    fn score_binned(&self, edges: &BinEdges, sums: &BinnedSums) -> Score {
        if sums.n_bins() != edges.n_bins() {
            return Score::Degenerate;
        }
        let a = self.prior;
        let n_bins = sums.n_bins();

        if (0..n_bins).any(|bin| self.mass.of(sums, bin) + a < 1.0) {
            return Score::Degenerate;
        }

        let s: f64 = (0..n_bins).map(|bin| self.mass.of(sums, bin) + a).sum();
        if s - 1.0 <= 0.0 {
            return Score::Degenerate;
        }

        let log_likelihood = edges
            .widths()
            .enumerate()
            .map(|(bin, d)| {
                let n = self.mass.of(sums, bin);
                if n == 0.0 {
                    0.0
                } else {
                    n * ((n + a - 1.0) / (d * (s - 1.0))).ln()
                }
            })
            .sum();

        Score::from_value(log_likelihood)
    }

    fn name(&self) -> &'static str {
        "log_likelihood"
    }
}
