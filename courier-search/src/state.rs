//! Logistics states: snapshots of the carrier and its requests.
//!
//! A state is built once, either as the root of a search by
//! [`LogisticsState::root`] or as a child of another state by the successor
//! generator, and never changes afterwards. Children copy the parent's
//! request sets and action trail instead of sharing them.

use std::fmt;

use courier_core::{Action, Location, Plan, PlanRequest, Request, RequestId, RequestSet};

/// Complete parameter record for a search root.
#[derive(Debug, Clone, PartialEq)]
pub struct RootParams {
    /// Initial carrier position, also the origin of every trail.
    pub position: Location,
    /// Maximum total weight aboard.
    pub capacity: u32,
    /// Cost charged per unit of distance.
    pub cost_rate: f64,
    /// Requests waiting to be picked up.
    pub available: RequestSet,
    /// Requests already aboard.
    pub carried: RequestSet,
}

impl From<&PlanRequest> for RootParams {
    fn from(request: &PlanRequest) -> Self {
        Self {
            position: request.carrier.position,
            capacity: request.carrier.capacity,
            cost_rate: request.carrier.cost_per_distance,
            available: request.available.iter().copied().collect(),
            carried: request.carried.iter().copied().collect(),
        }
    }
}

/// Snapshot of the carrier, its requests and the path that led here.
///
/// # Examples
/// ```
/// use courier_core::{Location, Request, RequestSet};
/// use courier_search::{LogisticsState, RootParams};
///
/// let parcel = Request::new(1, Location::new(0), Location::new(2), 10);
/// let root = LogisticsState::root(RootParams {
///     position: Location::new(0),
///     capacity: 20,
///     cost_rate: 1.0,
///     available: [parcel].into_iter().collect(),
///     carried: RequestSet::new(),
/// });
///
/// assert!(!root.is_terminal());
/// assert_eq!(root.carried_weight(), 0);
/// assert!(root.trail().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct LogisticsState {
    position: Location,
    capacity: u32,
    cost_rate: f64,
    accumulated_cost: f64,
    available: RequestSet,
    carried: RequestSet,
    carried_weight: u64,
    trail: Vec<Action>,
    root: Location,
}

/// Hashable identity of a dominance class.
///
/// Two states share a key when they agree on everything except their
/// accumulated cost and trail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DominanceKey {
    position: Location,
    capacity: u32,
    cost_rate_bits: u64,
    root: Location,
    carried_weight: u64,
    available: Vec<RequestId>,
    carried: Vec<RequestId>,
}

/// A single move of the carrier towards `destination`.
#[derive(Debug, Clone)]
pub(crate) struct Leg {
    pub(crate) destination: Location,
    pub(crate) via: Vec<Location>,
    pub(crate) distance: f64,
}

impl LogisticsState {
    /// Build the root state of a search.
    ///
    /// The carried weight only counts carried requests that still fit in
    /// identity order. Requests that do not fit stay aboard, are logged, and
    /// do not contribute to the weight, so the capacity invariant holds.
    #[must_use]
    pub fn root(params: RootParams) -> Self {
        let RootParams {
            position,
            capacity,
            cost_rate,
            available,
            carried,
        } = params;

        let mut carried_weight = 0_u64;
        for request in &carried {
            let load = carried_weight.saturating_add(u64::from(request.weight));
            if load <= u64::from(capacity) {
                carried_weight = load;
            } else {
                log::warn!(
                    "carried request {request} does not fit capacity {capacity} \
                     (load already {carried_weight}); its weight is not counted"
                );
            }
        }

        Self {
            position,
            capacity,
            cost_rate,
            accumulated_cost: 0.0,
            available,
            carried,
            carried_weight,
            trail: Vec::new(),
            root: position,
        }
    }

    /// Build the root state for a planning call.
    #[must_use]
    pub fn from_request(request: &PlanRequest) -> Self {
        Self::root(RootParams::from(request))
    }

    /// Current carrier position.
    #[must_use]
    pub const fn position(&self) -> Location {
        self.position
    }

    /// Carrier capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Cost charged per unit of distance.
    #[must_use]
    pub const fn cost_rate(&self) -> f64 {
        self.cost_rate
    }

    /// Cost of the trail so far.
    #[must_use]
    pub const fn accumulated_cost(&self) -> f64 {
        self.accumulated_cost
    }

    /// Requests waiting to be picked up.
    #[must_use]
    pub const fn available(&self) -> &RequestSet {
        &self.available
    }

    /// Requests aboard.
    #[must_use]
    pub const fn carried(&self) -> &RequestSet {
        &self.carried
    }

    /// Weight aboard, never above [`capacity`](Self::capacity).
    #[must_use]
    pub const fn carried_weight(&self) -> u64 {
        self.carried_weight
    }

    /// Actions from the root location to this state.
    #[must_use]
    pub fn trail(&self) -> &[Action] {
        &self.trail
    }

    /// Location every trail of this search starts from.
    #[must_use]
    pub const fn root_location(&self) -> Location {
        self.root
    }

    /// Whether nothing is left to pick up or deliver.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.available.is_empty() && self.carried.is_empty()
    }

    /// Whether `weight` more units fit aboard.
    #[must_use]
    pub fn can_load(&self, weight: u32) -> bool {
        self.carried_weight.saturating_add(u64::from(weight)) <= u64::from(self.capacity)
    }

    /// Key of this state's dominance class.
    #[must_use]
    pub fn dominance_key(&self) -> DominanceKey {
        DominanceKey {
            position: self.position,
            capacity: self.capacity,
            cost_rate_bits: self.cost_rate.to_bits(),
            root: self.root,
            carried_weight: self.carried_weight,
            available: self.available.ids().collect(),
            carried: self.carried.ids().collect(),
        }
    }

    /// Whether both states agree on everything but cost and trail.
    #[must_use]
    pub fn is_dominance_equal(&self, other: &Self) -> bool {
        self.position == other.position
            && self.capacity == other.capacity
            && self.cost_rate.to_bits() == other.cost_rate.to_bits()
            && self.root == other.root
            && self.carried_weight == other.carried_weight
            && self.available == other.available
            && self.carried == other.carried
    }

    /// The trail as a plan anchored at the root location.
    #[must_use]
    pub fn plan(&self) -> Plan {
        Plan::new(self.root, self.trail.clone())
    }

    /// Derive the child reached by travelling `leg`, delivering `deliveries`
    /// on arrival and then picking up `pickup`.
    ///
    /// Callers check capacity beforehand; the child is never overloaded.
    #[expect(
        clippy::float_arithmetic,
        reason = "travel cost is distance times a real-valued rate"
    )]
    pub(crate) fn derive(&self, leg: &Leg, deliveries: &[Request], pickup: Option<Request>) -> Self {
        let mut trail = Vec::with_capacity(
            self.trail.len() + leg.via.len() + deliveries.len() + 2,
        );
        trail.extend_from_slice(&self.trail);
        trail.extend(leg.via.iter().map(|&to| Action::Move { to }));
        if leg.destination != self.position {
            trail.push(Action::Move {
                to: leg.destination,
            });
        }

        let mut carried = self.carried.clone();
        let mut carried_weight = self.carried_weight;
        for request in deliveries {
            carried.remove(request.id);
            carried_weight = carried_weight.saturating_sub(u64::from(request.weight));
            trail.push(Action::Deliver {
                request: request.id,
            });
        }

        let mut available = self.available.clone();
        if let Some(request) = pickup {
            available.remove(request.id);
            carried.insert(request);
            carried_weight = carried_weight.saturating_add(u64::from(request.weight));
            trail.push(Action::Pickup {
                request: request.id,
            });
        }

        debug_assert!(
            carried_weight <= u64::from(self.capacity),
            "successor would exceed capacity"
        );

        Self {
            position: leg.destination,
            capacity: self.capacity,
            cost_rate: self.cost_rate,
            accumulated_cost: self.accumulated_cost + leg.distance * self.cost_rate,
            available,
            carried,
            carried_weight,
            trail,
            root: self.root,
        }
    }
}

impl fmt::Display for LogisticsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "carrier at {} with {}/{} and cost {:.2}",
            self.position, self.carried_weight, self.capacity, self.accumulated_cost
        )?;
        for request in &self.available {
            write!(f, "\n\tto pick up: {request}")?;
        }
        for request in &self.carried {
            write!(f, "\n\taboard: {request}")?;
        }
        Ok(())
    }
}
