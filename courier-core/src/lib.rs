//! Core domain types for the Courier planner.
//!
//! The crate models a single carrier that moves transport requests between
//! locations of a road network. It defines the request and plan vocabulary,
//! the [`Geography`] boundary used to price moves, and the [`Planner`] trait
//! implemented by the search crate. Constructors and validators return
//! `Result` to surface invalid input early.

#![forbid(unsafe_code)]

mod action;
mod algorithm;
mod carrier;
pub mod geography;
mod location;
mod plan;
mod planner;
mod request;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use action::Action;
pub use algorithm::{Algorithm, Strategy, UnknownAlgorithmError};
pub use carrier::CarrierProfile;
pub use geography::{City, Geography, Road, Topology, TopologyError, TopologySpec};
pub use location::Location;
pub use plan::{Plan, PlanReplayError, ReplaySummary};
pub use planner::{
    Diagnostics, PlanError, PlanOutcome, PlanRequest, PlanRequestValidationError, PlanResponse,
    Planner,
};
pub use request::{Request, RequestId, RequestSet};
