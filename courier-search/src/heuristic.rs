//! Remaining-cost estimates used to order the A* frontier.

use courier_core::Geography;

use crate::state::LogisticsState;

/// Lower bound on the cost still needed to finish from a state.
///
/// Estimates must be non-negative and never exceed the true remaining cost,
/// otherwise A* may return a more expensive plan.
pub trait Heuristic: Send + Sync {
    /// Estimate the remaining cost of `state`.
    fn estimate<G>(&self, state: &LogisticsState, geography: &G) -> f64
    where
        G: Geography + ?Sized;
}

/// Cost of serving the single farthest outstanding request on its own.
///
/// For each waiting request this is the trip to its pickup and on to its
/// delivery; for each carried request the trip to its delivery. Every plan
/// has to cover at least the largest of these, so the estimate is
/// admissible.
///
/// # Examples
/// ```
/// use courier_core::{Geography, Location, Request, RequestSet};
/// use courier_search::{FarthestRequest, Heuristic, LogisticsState, RootParams};
///
/// struct Line;
///
/// impl Geography for Line {
///     fn distance(&self, from: Location, to: Location) -> f64 {
///         f64::from(from.id().abs_diff(to.id()))
///     }
///
///     fn shortest_path(&self, _from: Location, _to: Location) -> Vec<Location> {
///         Vec::new()
///     }
/// }
///
/// let state = LogisticsState::root(RootParams {
///     position: Location::new(0),
///     capacity: 10,
///     cost_rate: 2.0,
///     available: [Request::new(1, Location::new(3), Location::new(1), 1)]
///         .into_iter()
///         .collect(),
///     carried: RequestSet::new(),
/// });
///
/// assert_eq!(FarthestRequest.estimate(&state, &Line), 10.0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FarthestRequest;

impl Heuristic for FarthestRequest {
    #[expect(
        clippy::float_arithmetic,
        reason = "distances are summed and scaled by the cost rate"
    )]
    fn estimate<G>(&self, state: &LogisticsState, geography: &G) -> f64
    where
        G: Geography + ?Sized,
    {
        let here = state.position();
        let waiting = state.available().iter().map(|request| {
            geography.distance(here, request.pickup)
                + geography.distance(request.pickup, request.delivery)
        });
        let aboard = state
            .carried()
            .iter()
            .map(|request| geography.distance(here, request.delivery));

        let farthest = waiting.chain(aboard).fold(0.0_f64, f64::max);
        farthest * state.cost_rate()
    }
}

/// Estimates zero everywhere, turning A* into uniform-cost search.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate<G>(&self, _state: &LogisticsState, _geography: &G) -> f64
    where
        G: Geography + ?Sized,
    {
        0.0
    }
}
