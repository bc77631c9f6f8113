//! Breadth-first drivers.

use std::collections::VecDeque;

use courier_core::Geography;

use super::{SearchLimits, SearchOutcome, SearchReport, SearchStats};
use crate::state::LogisticsState;
use crate::successors::successors;

/// Breadth-first search returning the first terminal state dequeued.
///
/// The plan found uses the fewest transitions, not the lowest cost.
#[must_use]
pub fn breadth_first<G>(root: LogisticsState, geography: &G, limits: SearchLimits) -> SearchReport
where
    G: Geography + ?Sized,
{
    let mut stats = SearchStats::default();
    let mut frontier = VecDeque::from([root]);

    while let Some(state) = frontier.pop_front() {
        if state.is_terminal() {
            return SearchReport::new(SearchOutcome::Found(state), stats);
        }
        if !limits.allows_expansion(stats.expanded) {
            return SearchReport::new(SearchOutcome::Abandoned, stats);
        }
        let children = successors(&state, geography);
        stats.record_expansion(children.len());
        frontier.extend(children);
    }
    SearchReport::new(SearchOutcome::Exhausted, stats)
}

/// Breadth-first search keeping the cheapest terminal state.
///
/// Terminal states become the provisional best; any later state costing at
/// least as much is discarded unexpanded. The best terminal is returned once
/// the frontier is empty. Hitting the limits discards the provisional best.
#[must_use]
pub fn cost_optimal_breadth_first<G>(
    root: LogisticsState,
    geography: &G,
    limits: SearchLimits,
) -> SearchReport
where
    G: Geography + ?Sized,
{
    let mut stats = SearchStats::default();
    let mut best: Option<LogisticsState> = None;
    let mut frontier = VecDeque::from([root]);

    while let Some(state) = frontier.pop_front() {
        if let Some(incumbent) = &best
            && state.accumulated_cost() >= incumbent.accumulated_cost()
        {
            stats.record_pruned();
            continue;
        }
        if state.is_terminal() {
            log::debug!("new best terminal at cost {:.2}", state.accumulated_cost());
            best = Some(state);
            continue;
        }
        if !limits.allows_expansion(stats.expanded) {
            return SearchReport::new(SearchOutcome::Abandoned, stats);
        }
        let children = successors(&state, geography);
        stats.record_expansion(children.len());
        frontier.extend(children);
    }

    let outcome = best.map_or(SearchOutcome::Exhausted, SearchOutcome::Found);
    SearchReport::new(outcome, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::Request;
    use courier_core::test_support::{LineGeography, loc, request};
    use rstest::rstest;

    use crate::state::RootParams;

    fn root(capacity: u32, available: &[Request]) -> LogisticsState {
        LogisticsState::root(RootParams {
            position: loc(0),
            capacity,
            cost_rate: 1.0,
            available: available.iter().copied().collect(),
            carried: courier_core::RequestSet::new(),
        })
    }

    #[rstest]
    fn terminal_root_returns_immediately() {
        let report = breadth_first(root(5, &[]), &LineGeography, SearchLimits::default());
        let state = report.outcome.found().expect("terminal root");
        assert!(state.trail().is_empty());
        assert_eq!(report.stats.expanded, 0);
    }

    #[rstest]
    fn cost_optimal_is_never_worse_than_first_found() {
        let parcels = [request(1, 5, 9, 1), request(2, 5, 1, 1), request(3, 2, 8, 1)];
        let plain = breadth_first(root(1, &parcels), &LineGeography, SearchLimits::default());
        let optimal =
            cost_optimal_breadth_first(root(1, &parcels), &LineGeography, SearchLimits::default());

        let plain_cost = plain.outcome.found().expect("plain plan").accumulated_cost();
        let optimal_state = optimal.outcome.found().expect("optimal plan");
        assert!(optimal_state.accumulated_cost() <= plain_cost);
        assert!(optimal_state.is_terminal());
    }

    #[rstest]
    fn plain_bfs_trades_cost_for_fewest_transitions() {
        // Every plan takes six transitions. Plain BFS follows the nearest
        // stop first (3 -> 2 -> 0 -> 5, cost 8) while the cheapest tour
        // goes 3 -> 5 -> 2 -> 0 at cost 7.
        let stops = [request(1, 2, 2, 1), request(2, 5, 5, 1), request(3, 0, 0, 1)];
        let start = || {
            LogisticsState::root(RootParams {
                position: loc(3),
                capacity: 5,
                cost_rate: 1.0,
                available: stops.iter().copied().collect(),
                carried: courier_core::RequestSet::new(),
            })
        };

        let plain = breadth_first(start(), &LineGeography, SearchLimits::default());
        let optimal =
            cost_optimal_breadth_first(start(), &LineGeography, SearchLimits::default());

        let plain_state = plain.outcome.found().expect("plain plan");
        let optimal_state = optimal.outcome.found().expect("optimal plan");
        assert!(plain_state.is_terminal());
        assert!(optimal_state.is_terminal());
        assert_eq!(plain_state.accumulated_cost(), 8.0);
        assert_eq!(optimal_state.accumulated_cost(), 7.0);
        assert!(plain_state.accumulated_cost() > optimal_state.accumulated_cost());
    }

    #[rstest]
    fn expansion_cap_abandons_the_search() {
        let parcels = [request(1, 1, 2, 1), request(2, 3, 4, 1)];
        let limits = SearchLimits::with_max_expansions(1);
        let plain = breadth_first(root(5, &parcels), &LineGeography, limits);
        let optimal = cost_optimal_breadth_first(root(5, &parcels), &LineGeography, limits);
        assert!(matches!(plain.outcome, SearchOutcome::Abandoned));
        assert!(matches!(optimal.outcome, SearchOutcome::Abandoned));
        assert_eq!(plain.stats.expanded, 1);
    }
}
