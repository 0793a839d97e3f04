//! Search strategy abstraction

use crate::grow_prune::GrowPruneSearch;
use crate::merge::MergeSearch;
use crate::score::Scorer;
use crate::stepwise::StepwiseSearch;
use optbin_core::{BinEdges, Error, Result, Sample};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest `max_bins` any strategy accepts
pub const MIN_MAX_BINS: usize = 3;

/// The winning edge set of a search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Edges of the best candidate found
    pub edges: BinEdges,
    /// Log-likelihood of those edges
    pub score: f64,
    /// Number of candidates the scorer evaluated
    pub evaluations: usize,
}

/// A procedure that picks bin edges for a sample by maximising a [`Scorer`]
pub trait SearchStrategy {
    /// Search for the best edge set
    ///
    /// Fails with `DegenerateSearch` when no scorable candidate is found.
    fn search<S: Scorer + ?Sized>(&self, sample: &Sample<'_>, scorer: &S) -> Result<SearchOutcome>;

    /// Get the name of the strategy
    fn name(&self) -> &'static str;

    /// Upper bound on the number of bins considered
    fn max_bins(&self) -> usize;
}

pub(crate) fn check_max_bins<T: SearchStrategy + ?Sized>(strategy: &T) -> Result<()> {
    let max_bins = strategy.max_bins();
    if max_bins < MIN_MAX_BINS {
        return Err(Error::InvalidParameter(format!(
            "{} search needs max_bins of at least {MIN_MAX_BINS}, got {max_bins}",
            strategy.name()
        )));
    }
    Ok(())
}

/// Selects one of the built-in strategies by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Equal-width bin-count sweep
    Stepwise,
    /// Bottom-up agglomerative merge
    #[default]
    Merge,
    /// Grow splits from one bin, then merge
    GrowPrune,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Stepwise, Strategy::Merge, Strategy::GrowPrune];

    /// Run this strategy with the given bin budget
    pub fn search<S: Scorer + ?Sized>(
        self,
        max_bins: usize,
        sample: &Sample<'_>,
        scorer: &S,
    ) -> Result<SearchOutcome> {
        match self {
            Strategy::Stepwise => StepwiseSearch::new(max_bins).search(sample, scorer),
            Strategy::Merge => MergeSearch::new(max_bins).search(sample, scorer),
            Strategy::GrowPrune => GrowPruneSearch::new(max_bins).search(sample, scorer),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Stepwise => "stepwise",
            Strategy::Merge => "merge",
            Strategy::GrowPrune => "grow_prune",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "stepwise" => Ok(Strategy::Stepwise),
            "merge" => Ok(Strategy::Merge),
            "grow_prune" => Ok(Strategy::GrowPrune),
            other => Err(Error::InvalidParameter(format!(
                "unknown search strategy '{other}' (expected stepwise, merge or grow_prune)"
            ))),
        }
    }
}
