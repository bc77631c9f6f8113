//! Facade crate for the courier pickup-and-delivery planner.
//!
//! Re-exports the domain vocabulary from `courier-core` and, with the default
//! `search` feature, the state-space [`SearchPlanner`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use courier_core::{
    Action, Algorithm, CarrierProfile, City, Diagnostics, Geography, Location, Plan, PlanError,
    PlanOutcome, PlanReplayError, PlanRequest, PlanRequestValidationError, PlanResponse, Planner,
    ReplaySummary, Request, RequestId, RequestSet, Road, Strategy, Topology, TopologyError,
    TopologySpec, UnknownAlgorithmError,
};

#[cfg(feature = "search")]
#[cfg_attr(docsrs, doc(cfg(feature = "search")))]
pub use courier_search::{
    FarthestRequest, Heuristic, LogisticsState, SearchLimits, SearchOutcome, SearchPlanner,
    SearchPlannerConfig, SearchReport, SearchStats,
};

#[cfg(feature = "test-support")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use courier_core::test_support;
