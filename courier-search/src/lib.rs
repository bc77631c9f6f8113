//! Exhaustive state-space search for single-carrier pickup and delivery.
//!
//! This crate provides [`SearchPlanner`], the default implementation of the
//! [`Planner`](courier_core::Planner) trait. A planning call is turned into a
//! root [`LogisticsState`]; the [`successors`] function expands a state into
//! every "useful" next state (move and deliver, move and pick up), and one of
//! the drivers in [`driver`] walks that graph until a terminal state, whose
//! action trail is the plan, is reached.
//!
//! Three drivers are available: plain breadth-first enumeration, its
//! cost-optimal variant, and A* with the [`FarthestRequest`] heuristic and
//! dominance pruning through a [`ClosedSet`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod driver;
mod heuristic;
mod planner;
mod state;
mod successors;

pub use driver::{ClosedSet, SearchLimits, SearchOutcome, SearchReport, SearchStats};
pub use heuristic::{FarthestRequest, Heuristic, ZeroHeuristic};
pub use planner::{SearchPlanner, SearchPlannerConfig};
pub use state::{DominanceKey, LogisticsState, RootParams};
pub use successors::successors;
