//! Carrier plans: ordered actions anchored at an origin.
//!
//! A plan can be replayed against the requests it was computed for to check
//! that it is complete and feasible.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Action, Geography, Location, RequestId, RequestSet};

/// An ordered action sequence starting at `origin`.
///
/// # Examples
/// ```
/// use courier_core::{Action, Location, Plan, RequestId};
///
/// let plan = Plan::new(
///     Location::new(0),
///     vec![
///         Action::Pickup { request: RequestId::new(1) },
///         Action::Move { to: Location::new(1) },
///         Action::Deliver { request: RequestId::new(1) },
///     ],
/// );
/// assert_eq!(plan.actions.len(), 3);
/// assert!(!plan.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Location the first action starts from.
    pub origin: Location,
    /// Actions in execution order.
    pub actions: Vec<Action>,
}

/// Counters gathered while replaying a [`Plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Where the carrier ends up.
    pub final_position: Location,
    /// Number of move actions.
    pub moves: usize,
    /// Number of pickup actions.
    pub pickups: usize,
    /// Number of delivery actions.
    pub deliveries: usize,
}

/// Errors from [`Plan::replay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanReplayError {
    /// A pickup names a request that is not waiting to be picked up.
    #[error("{request} is not available for pickup")]
    NotAvailable {
        /// Offending request.
        request: RequestId,
    },
    /// A pickup happens away from the request's pickup location.
    #[error("{request} must be picked up at {expected}, carrier is at {actual}")]
    WrongPickupLocation {
        /// Offending request.
        request: RequestId,
        /// Pickup location of the request.
        expected: Location,
        /// Carrier position at the time of the pickup.
        actual: Location,
    },
    /// A delivery names a request that is not aboard.
    #[error("{request} is not aboard")]
    NotCarried {
        /// Offending request.
        request: RequestId,
    },
    /// A delivery happens away from the request's delivery location.
    #[error("{request} must be delivered at {expected}, carrier is at {actual}")]
    WrongDeliveryLocation {
        /// Offending request.
        request: RequestId,
        /// Delivery location of the request.
        expected: Location,
        /// Carrier position at the time of the delivery.
        actual: Location,
    },
    /// A pickup would overload the carrier.
    #[error("picking up {request} raises the load to {load}, above capacity {capacity}")]
    CapacityExceeded {
        /// Offending request.
        request: RequestId,
        /// Load after the pickup.
        load: u64,
        /// Carrier capacity.
        capacity: u32,
    },
    /// Requests are still waiting or aboard once the plan ends.
    #[error("{remaining} request(s) are unfinished at the end of the plan")]
    Unfinished {
        /// Number of requests left over.
        remaining: usize,
    },
}

impl Plan {
    /// Construct a plan.
    pub const fn new(origin: Location, actions: Vec<Action>) -> Self {
        Self { origin, actions }
    }

    /// A plan that performs no action.
    pub const fn empty(origin: Location) -> Self {
        Self::new(origin, Vec::new())
    }

    /// Whether the plan performs no action.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Sum of the geography distances of every move.
    pub fn total_distance<G: Geography + ?Sized>(&self, geography: &G) -> f64 {
        let mut position = self.origin;
        let mut total = 0.0;
        for action in &self.actions {
            if let Action::Move { to } = *action {
                total += geography.distance(position, to);
                position = to;
            }
        }
        total
    }

    /// Re-execute the plan and check it serves every request.
    ///
    /// `available` holds the requests waiting to be picked up and `carried`
    /// the requests aboard when the plan starts. Loads already aboard count
    /// towards `capacity`.
    ///
    /// # Examples
    /// ```
    /// use courier_core::{Action, Location, Plan, Request, RequestSet};
    ///
    /// let parcel = Request::new(1, Location::new(0), Location::new(1), 4);
    /// let available: RequestSet = [parcel].into_iter().collect();
    /// let plan = Plan::new(
    ///     Location::new(0),
    ///     vec![
    ///         Action::Pickup { request: parcel.id },
    ///         Action::Move { to: Location::new(1) },
    ///         Action::Deliver { request: parcel.id },
    ///     ],
    /// );
    ///
    /// let summary = plan.replay(10, &available, &RequestSet::new()).expect("feasible plan");
    /// assert_eq!(summary.final_position, Location::new(1));
    /// ```
    pub fn replay(
        &self,
        capacity: u32,
        available: &RequestSet,
        carried: &RequestSet,
    ) -> Result<ReplaySummary, PlanReplayError> {
        let mut waiting = available.clone();
        let mut aboard = carried.clone();
        let mut summary = ReplaySummary {
            final_position: self.origin,
            moves: 0,
            pickups: 0,
            deliveries: 0,
        };

        for action in &self.actions {
            let position = summary.final_position;
            match *action {
                Action::Move { to } => {
                    summary.final_position = to;
                    summary.moves += 1;
                }
                Action::Pickup { request } => {
                    let task = waiting
                        .remove(request)
                        .ok_or(PlanReplayError::NotAvailable { request })?;
                    if task.pickup != position {
                        return Err(PlanReplayError::WrongPickupLocation {
                            request,
                            expected: task.pickup,
                            actual: position,
                        });
                    }
                    let load = aboard.total_weight() + u64::from(task.weight);
                    if load > u64::from(capacity) {
                        return Err(PlanReplayError::CapacityExceeded {
                            request,
                            load,
                            capacity,
                        });
                    }
                    aboard.insert(task);
                    summary.pickups += 1;
                }
                Action::Deliver { request } => {
                    let task = aboard
                        .remove(request)
                        .ok_or(PlanReplayError::NotCarried { request })?;
                    if task.delivery != position {
                        return Err(PlanReplayError::WrongDeliveryLocation {
                            request,
                            expected: task.delivery,
                            actual: position,
                        });
                    }
                    summary.deliveries += 1;
                }
            }
        }

        let remaining = waiting.len() + aboard.len();
        if remaining > 0 {
            return Err(PlanReplayError::Unfinished { remaining });
        }
        Ok(summary)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {}", self.origin)?;
        for action in &self.actions {
            write!(f, ", {action}")?;
        }
        Ok(())
    }
}
