//! Dominance bookkeeping for A*.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::state::{DominanceKey, LogisticsState};

/// Result of offering a state to a [`ClosedSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admission {
    /// First state seen for its dominance class.
    New,
    /// Strictly cheaper than the previous representative, which it replaced.
    Improved {
        /// Cost of the replaced representative.
        previous_cost: f64,
    },
    /// No cheaper than the current representative; the state was rejected.
    Dominated {
        /// Cost of the representative that dominates it.
        best_cost: f64,
    },
}

impl Admission {
    /// Whether the offered state should be expanded.
    #[must_use]
    pub const fn is_admitted(self) -> bool {
        !matches!(self, Self::Dominated { .. })
    }
}

/// Best known cost for every dominance class visited by a search.
///
/// # Examples
/// ```
/// use courier_core::{Location, RequestSet};
/// use courier_search::{ClosedSet, LogisticsState, RootParams};
///
/// let root = LogisticsState::root(RootParams {
///     position: Location::new(0),
///     capacity: 1,
///     cost_rate: 1.0,
///     available: RequestSet::new(),
///     carried: RequestSet::new(),
/// });
///
/// let mut closed = ClosedSet::default();
/// assert!(closed.admit(&root).is_admitted());
/// assert!(!closed.admit(&root).is_admitted());
/// assert_eq!(closed.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ClosedSet {
    best: HashMap<DominanceKey, f64>,
}

impl ClosedSet {
    /// Create an empty closed set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `state`, recording it if it is the cheapest of its class.
    pub fn admit(&mut self, state: &LogisticsState) -> Admission {
        let cost = state.accumulated_cost();
        match self.best.entry(state.dominance_key()) {
            Entry::Vacant(entry) => {
                entry.insert(cost);
                Admission::New
            }
            Entry::Occupied(mut entry) => {
                let best_cost = *entry.get();
                if cost < best_cost {
                    entry.insert(cost);
                    Admission::Improved {
                        previous_cost: best_cost,
                    }
                } else {
                    Admission::Dominated { best_cost }
                }
            }
        }
    }

    /// Best recorded cost for the class of `state`, if any.
    #[must_use]
    pub fn best_cost(&self, state: &LogisticsState) -> Option<f64> {
        self.best.get(&state.dominance_key()).copied()
    }

    /// Number of dominance classes recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
