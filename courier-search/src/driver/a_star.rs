//! A* with dominance pruning.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use courier_core::Geography;

use super::{ClosedSet, SearchLimits, SearchOutcome, SearchReport, SearchStats};
use crate::heuristic::Heuristic;
use crate::state::LogisticsState;
use crate::successors::successors;

/// Frontier entry ordered so the max-heap pops the lowest priority first,
/// earliest insertion winning ties.
struct FrontierEntry {
    priority: f64,
    sequence: u64,
    state: LogisticsState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

struct Frontier<'h, H, G: ?Sized> {
    queue: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    heuristic: &'h H,
    geography: &'h G,
}

impl<'h, H, G> Frontier<'h, H, G>
where
    H: Heuristic,
    G: Geography + ?Sized,
{
    fn new(heuristic: &'h H, geography: &'h G) -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_sequence: 0,
            heuristic,
            geography,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "priority is path cost plus remaining estimate"
    )]
    fn push(&mut self, state: LogisticsState) {
        let priority =
            state.accumulated_cost() + self.heuristic.estimate(&state, self.geography);
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        self.queue.push(FrontierEntry {
            priority,
            sequence,
            state,
        });
    }

    fn pop(&mut self) -> Option<LogisticsState> {
        self.queue.pop().map(|entry| entry.state)
    }
}

/// A* search ordered by accumulated cost plus `heuristic`.
///
/// A non-terminal state is expanded only when it is the first of its
/// dominance class or strictly cheaper than the class's best so far. With an
/// admissible heuristic the first terminal state dequeued is a cheapest one.
#[must_use]
pub fn a_star<G, H>(
    root: LogisticsState,
    geography: &G,
    heuristic: &H,
    limits: SearchLimits,
) -> SearchReport
where
    G: Geography + ?Sized,
    H: Heuristic,
{
    let mut stats = SearchStats::default();
    let mut closed = ClosedSet::new();
    let mut frontier = Frontier::new(heuristic, geography);
    frontier.push(root);

    while let Some(state) = frontier.pop() {
        if state.is_terminal() {
            return SearchReport::new(SearchOutcome::Found(state), stats);
        }
        if !closed.admit(&state).is_admitted() {
            stats.record_pruned();
            continue;
        }
        if !limits.allows_expansion(stats.expanded) {
            return SearchReport::new(SearchOutcome::Abandoned, stats);
        }
        let children = successors(&state, geography);
        stats.record_expansion(children.len());
        for child in children {
            frontier.push(child);
        }
    }
    SearchReport::new(SearchOutcome::Exhausted, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::test_support::{LineGeography, loc, request};
    use courier_core::{Request, RequestSet};
    use rstest::rstest;

    use crate::driver::cost_optimal_breadth_first;
    use crate::heuristic::{FarthestRequest, ZeroHeuristic};
    use crate::state::RootParams;

    fn root(capacity: u32, available: &[Request], carried: &[Request]) -> LogisticsState {
        LogisticsState::root(RootParams {
            position: loc(3),
            capacity,
            cost_rate: 1.0,
            available: available.iter().copied().collect(),
            carried: carried.iter().copied().collect(),
        })
    }

    fn cost_of(report: &SearchReport) -> f64 {
        report
            .outcome
            .found()
            .expect("search should find a plan")
            .accumulated_cost()
    }

    #[rstest]
    fn frontier_pops_lowest_priority_then_oldest() {
        let mut frontier = Frontier::new(&ZeroHeuristic, &LineGeography);
        let idle = |position| {
            LogisticsState::root(RootParams {
                position: loc(position),
                capacity: 1,
                cost_rate: 1.0,
                available: RequestSet::new(),
                carried: RequestSet::new(),
            })
        };
        frontier.push(idle(1));
        frontier.push(idle(2));
        frontier.push(idle(3));
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|state| state.position())
            .collect();
        assert_eq!(order, vec![loc(1), loc(2), loc(3)]);
    }

    #[rstest]
    #[case::spread_out(2, &[request(1, 0, 6, 1), request(2, 5, 1, 1), request(3, 7, 2, 1)], &[])]
    #[case::tight_capacity(1, &[request(1, 4, 0, 1), request(2, 2, 6, 1)], &[request(3, 0, 5, 1)])]
    #[case::shared_stops(3, &[request(1, 1, 5, 2), request(2, 1, 5, 1), request(3, 5, 1, 3)], &[])]
    fn a_star_matches_cost_optimal_bfs(
        #[case] capacity: u32,
        #[case] available: &[Request],
        #[case] carried: &[Request],
    ) {
        let limits = SearchLimits::unlimited();
        let informed = a_star(
            root(capacity, available, carried),
            &LineGeography,
            &FarthestRequest,
            limits,
        );
        let uniform = a_star(
            root(capacity, available, carried),
            &LineGeography,
            &ZeroHeuristic,
            limits,
        );
        let exhaustive =
            cost_optimal_breadth_first(root(capacity, available, carried), &LineGeography, limits);

        assert!((cost_of(&informed) - cost_of(&exhaustive)).abs() < 1e-9);
        assert!((cost_of(&uniform) - cost_of(&exhaustive)).abs() < 1e-9);
    }

    #[rstest]
    fn terminal_root_is_returned_without_expansion() {
        let report = a_star(
            root(1, &[], &[]),
            &LineGeography,
            &FarthestRequest,
            SearchLimits::with_max_expansions(0),
        );
        assert!(report.outcome.found().is_some_and(|state| state.trail().is_empty()));
        assert_eq!(report.stats, SearchStats::default());
    }

    #[rstest]
    fn zero_expansion_cap_abandons() {
        let report = a_star(
            root(1, &[request(1, 0, 1, 1)], &[]),
            &LineGeography,
            &FarthestRequest,
            SearchLimits::with_max_expansions(0),
        );
        assert!(matches!(report.outcome, SearchOutcome::Abandoned));
    }
}
