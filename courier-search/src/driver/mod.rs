//! Search drivers walking the successor graph of a [`LogisticsState`].
//!
//! Every driver starts from a root state and keeps removing states from its
//! frontier until a terminal one is accepted, the frontier runs dry, or the
//! configured [`SearchLimits`] are hit. An already terminal root is returned
//! as is, with an empty trail.

mod a_star;
mod bfs;
mod closed_set;

use courier_core::{Geography, Strategy};

use crate::heuristic::FarthestRequest;
use crate::state::LogisticsState;

pub use a_star::a_star;
pub use bfs::{breadth_first, cost_optimal_breadth_first};
pub use closed_set::{Admission, ClosedSet};

/// Bounds placed on one search run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of states to expand; `None` means unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchLimits {
    /// Limits that never stop a search.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_expansions: None,
        }
    }

    /// Limits stopping the search after `max_expansions` expansions.
    #[must_use]
    pub const fn with_max_expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Whether one more expansion is allowed after `expanded` so far.
    #[must_use]
    pub const fn allows_expansion(&self, expanded: u64) -> bool {
        match self.max_expansions {
            Some(max) => expanded < max,
            None => true,
        }
    }
}

/// Counters collected while a driver runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken off the frontier and expanded.
    pub expanded: u64,
    /// Successor states produced.
    pub generated: u64,
    /// States discarded by a cost bound or dominance.
    pub pruned: u64,
}

impl SearchStats {
    pub(crate) fn record_expansion(&mut self, children: usize) {
        self.expanded = self.expanded.saturating_add(1);
        self.generated = self
            .generated
            .saturating_add(u64::try_from(children).unwrap_or(u64::MAX));
    }

    pub(crate) const fn record_pruned(&mut self) {
        self.pruned = self.pruned.saturating_add(1);
    }
}

/// How a driver run ended.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// A terminal state was accepted; its trail is the plan.
    Found(LogisticsState),
    /// The frontier emptied without an accepted terminal state.
    Exhausted,
    /// [`SearchLimits`] stopped the run.
    Abandoned,
}

impl SearchOutcome {
    /// The accepted terminal state, if any.
    #[must_use]
    pub const fn found(&self) -> Option<&LogisticsState> {
        match self {
            Self::Found(state) => Some(state),
            Self::Exhausted | Self::Abandoned => None,
        }
    }
}

/// Outcome and counters of one driver run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// How the run ended.
    pub outcome: SearchOutcome,
    /// Counters collected during the run.
    pub stats: SearchStats,
}

impl SearchReport {
    pub(crate) const fn new(outcome: SearchOutcome, stats: SearchStats) -> Self {
        Self { outcome, stats }
    }
}

/// Run the driver named by `strategy` from `root`.
///
/// A* uses the [`FarthestRequest`] heuristic; call [`a_star`] directly to
/// supply another one.
#[must_use]
pub fn search<G>(
    strategy: Strategy,
    root: LogisticsState,
    geography: &G,
    limits: SearchLimits,
) -> SearchReport
where
    G: Geography + ?Sized,
{
    let report = match strategy {
        Strategy::Bfs => breadth_first(root, geography, limits),
        Strategy::CostOptimalBfs => cost_optimal_breadth_first(root, geography, limits),
        Strategy::AStar => a_star(root, geography, &FarthestRequest, limits),
    };
    log::debug!(
        "{strategy} search: expanded {}, generated {}, pruned {}",
        report.stats.expanded,
        report.stats.generated,
        report.stats.pruned
    );
    report
}
