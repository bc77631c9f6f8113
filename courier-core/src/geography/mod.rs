//! Distances and shortest paths between locations.
//!
//! The [`Geography`] trait is the only view the planner has of the road
//! network. [`Topology`] is a concrete implementation over a weighted,
//! undirected graph of cities and roads, suitable for loading from JSON.
//!
//! Errors are returned when a topology description is inconsistent, e.g. a
//! road referencing an unknown city.

mod error;
mod provider;
mod topology;

pub use error::TopologyError;
pub use provider::Geography;
pub use topology::{City, Road, Topology, TopologySpec};
