//! Successor generation for [`LogisticsState`].

use std::collections::{BTreeMap, HashSet};

use courier_core::{Geography, Location, Request, RequestId};

use crate::state::{Leg, LogisticsState};

/// Expand `state` into every state reachable by one useful transition.
///
/// A transition either travels to a delivery location, hands over every
/// carried request bound there and optionally picks up one request waiting
/// at the same place, or travels to the pickup location of one available
/// request and loads it. Successors that would overload the carrier are
/// never built. The result is stably ordered by ascending accumulated cost
/// and is empty only for terminal states.
///
/// # Examples
/// ```
/// use courier_core::{Geography, Location, Request, RequestSet};
/// use courier_search::{LogisticsState, RootParams, successors};
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
/// let root = LogisticsState::root(RootParams {
///     position: Location::new(0),
///     capacity: 10,
///     cost_rate: 1.0,
///     available: [Request::new(1, Location::new(2), Location::new(5), 4)]
///         .into_iter()
///         .collect(),
///     carried: RequestSet::new(),
/// });
///
/// let children = successors(&root, &Line);
/// assert_eq!(children.len(), 1);
/// assert_eq!(children[0].position(), Location::new(2));
/// ```
#[must_use]
pub fn successors<G>(state: &LogisticsState, geography: &G) -> Vec<LogisticsState>
where
    G: Geography + ?Sized,
{
    let mut children = Vec::new();
    let mut consumed: HashSet<RequestId> = HashSet::new();

    for (destination, group) in delivery_groups(state) {
        let leg = leg_to(state.position(), destination, geography);
        let group_weight: u64 = group.iter().map(|request| u64::from(request.weight)).sum();
        let remaining = state.carried_weight().saturating_sub(group_weight);

        for pickup in state
            .available()
            .iter()
            .filter(|request| request.pickup == destination)
        {
            if remaining.saturating_add(u64::from(pickup.weight)) <= u64::from(state.capacity())
            {
                consumed.insert(pickup.id);
                children.push(state.derive(&leg, &group, Some(*pickup)));
            }
        }
        children.push(state.derive(&leg, &group, None));
    }

    for pickup in state.available() {
        if consumed.contains(&pickup.id) || !state.can_load(pickup.weight) {
            continue;
        }
        let leg = leg_to(state.position(), pickup.pickup, geography);
        children.push(state.derive(&leg, &[], Some(*pickup)));
    }

    children.sort_by(|a, b| a.accumulated_cost().total_cmp(&b.accumulated_cost()));
    children
}

/// Carried requests grouped by shared delivery location, each group in
/// identity order.
fn delivery_groups(state: &LogisticsState) -> BTreeMap<Location, Vec<Request>> {
    let mut groups: BTreeMap<Location, Vec<Request>> = BTreeMap::new();
    for request in state.carried() {
        groups.entry(request.delivery).or_default().push(*request);
    }
    groups
}

fn leg_to<G>(from: Location, to: Location, geography: &G) -> Leg
where
    G: Geography + ?Sized,
{
    if from == to {
        return Leg {
            destination: to,
            via: Vec::new(),
            distance: 0.0,
        };
    }
    Leg {
        destination: to,
        via: geography.shortest_path(from, to),
        distance: geography.distance(from, to),
    }
}
