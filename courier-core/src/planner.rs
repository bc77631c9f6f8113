use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CarrierProfile, Plan, Request, RequestId, Strategy};

/// Parameters for one planning call.
///
/// The request captures the carrier, the requests waiting to be picked up
/// and the requests already aboard.
///
/// # Examples
/// ```rust
/// use courier_core::{CarrierProfile, Location, PlanRequest, Request};
///
/// let request = PlanRequest {
///     carrier: CarrierProfile::new(Location::new(0), 50, 1.0),
///     available: vec![Request::new(1, Location::new(0), Location::new(3), 20)],
///     carried: Vec::new(),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// The carrier to plan for.
    pub carrier: CarrierProfile,
    /// Requests waiting at their pickup locations.
    #[serde(default)]
    pub available: Vec<Request>,
    /// Requests already aboard the carrier.
    #[serde(default)]
    pub carried: Vec<Request>,
}

/// Detailed validation failures for [`PlanRequest`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanRequestValidationError {
    /// The carrier cannot hold anything.
    #[error("carrier capacity must be positive")]
    ZeroCapacity,
    /// The cost rate is zero, negative, NaN or infinite.
    #[error("cost per distance unit must be positive and finite, got {rate}")]
    InvalidCostRate {
        /// The rejected rate.
        rate: f64,
    },
    /// The same identity appears twice across both request lists.
    #[error("request {id} appears more than once")]
    DuplicateRequest {
        /// The repeated identity.
        id: RequestId,
    },
}

impl PlanRequest {
    /// Validate the request, collapsing failures into [`PlanError`].
    pub fn validate(&self) -> Result<(), PlanError> {
        self.validate_detailed().map_err(PlanError::from)
    }

    /// Validate the request and report which rule failed.
    ///
    /// Capacity is not checked here. An over-capacity `carried` list is
    /// tolerated with a warning, and an available request heavier than the
    /// carrier leaves the search without a feasible plan.
    pub fn validate_detailed(&self) -> Result<(), PlanRequestValidationError> {
        let carrier = &self.carrier;
        if carrier.capacity == 0 {
            return Err(PlanRequestValidationError::ZeroCapacity);
        }
        if !carrier.cost_per_distance.is_finite() || carrier.cost_per_distance <= 0.0 {
            return Err(PlanRequestValidationError::InvalidCostRate {
                rate: carrier.cost_per_distance,
            });
        }

        let mut seen = HashSet::with_capacity(self.available.len() + self.carried.len());
        for request in self.available.iter().chain(&self.carried) {
            if !seen.insert(request.id) {
                return Err(PlanRequestValidationError::DuplicateRequest { id: request.id });
            }
        }
        Ok(())
    }
}

/// How a planning call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanOutcome {
    /// A complete plan was found.
    Found,
    /// There was nothing to pick up or deliver.
    NothingToDo,
    /// The search ran out of states without reaching a terminal one.
    Exhausted,
    /// The search hit its expansion limit.
    Abandoned,
}

impl PlanOutcome {
    /// Whether the outcome carries a usable plan.
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Found | Self::NothingToDo)
    }
}

/// Search statistics recorded for a planning call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Wall-clock time spent planning.
    pub plan_time: Duration,
    /// Driver that ran.
    pub strategy: Strategy,
    /// How the search ended.
    pub outcome: PlanOutcome,
    /// States taken off the frontier and expanded.
    pub expanded: u64,
    /// Successor states generated.
    pub generated: u64,
    /// States discarded by cost bound or dominance.
    pub pruned: u64,
}

/// Response from a planning call.
///
/// An unsuccessful search yields an empty plan; [`Diagnostics::outcome`]
/// tells the two apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Actions anchored at the carrier's initial position.
    pub plan: Plan,
    /// Realised cost of the plan.
    pub cost: f64,
    /// Distance travelled by the plan.
    pub total_distance: f64,
    /// Search statistics.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Request parameters were invalid, e.g. zero capacity.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] PlanRequestValidationError),
}

/// Compute a plan serving every request of a [`PlanRequest`].
///
/// Implementations should return [`PlanError::InvalidRequest`] for invalid
/// parameters rather than panicking.
/// Planners must be `Send + Sync` to operate safely across threads.
pub trait Planner: Send + Sync {
    /// Plan a request, producing a response or an error.
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    use crate::Location;
    use crate::test_support::{loc, request};

    #[fixture]
    fn valid() -> PlanRequest {
        PlanRequest {
            carrier: CarrierProfile::new(loc(0), 30, 2.0),
            available: vec![request(1, 0, 1, 10), request(2, 1, 2, 10)],
            carried: vec![request(3, 5, 0, 10)],
        }
    }

    #[rstest]
    fn accepts_valid_request(valid: PlanRequest) {
        assert_eq!(valid.validate_detailed(), Ok(()));
    }

    #[rstest]
    fn rejects_zero_capacity(mut valid: PlanRequest) {
        valid.carrier.capacity = 0;
        assert_eq!(
            valid.validate_detailed(),
            Err(PlanRequestValidationError::ZeroCapacity)
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_bad_cost_rate(mut valid: PlanRequest, #[case] rate: f64) {
        valid.carrier.cost_per_distance = rate;
        assert!(matches!(
            valid.validate_detailed(),
            Err(PlanRequestValidationError::InvalidCostRate { .. })
        ));
    }

    #[rstest]
    fn rejects_identity_shared_between_lists(mut valid: PlanRequest) {
        valid.carried.push(request(1, 4, 4, 1));
        assert_eq!(
            valid.validate_detailed(),
            Err(PlanRequestValidationError::DuplicateRequest {
                id: RequestId::new(1)
            })
        );
    }

    #[rstest]
    fn accepts_available_request_heavier_than_capacity(mut valid: PlanRequest) {
        valid.available.push(request(9, 0, 1, 31));
        assert_eq!(valid.validate(), Ok(()));
    }

    #[rstest]
    fn tolerates_overloaded_carried_list(mut valid: PlanRequest) {
        valid.carried.push(request(7, 2, 4, 25));
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn outcome_success_flags() {
        assert!(PlanOutcome::Found.is_success());
        assert!(PlanOutcome::NothingToDo.is_success());
        assert!(!PlanOutcome::Exhausted.is_success());
        assert!(!PlanOutcome::Abandoned.is_success());
    }

    #[test]
    fn request_lists_default_to_empty() {
        let decoded: PlanRequest = serde_json::from_str(
            r#"{ "carrier": { "position": 2, "capacity": 10, "cost_per_distance": 1.5 } }"#,
        )
        .expect("decode plan request");
        assert!(decoded.available.is_empty());
        assert!(decoded.carried.is_empty());
        assert_eq!(decoded.carrier.position, Location::new(2));
    }
}
