//! Search algorithm selection.
//!
//! [`Algorithm`] is the user-facing setting read once from configuration;
//! [`Strategy`] names the concrete search driver that runs. Selecting BFS
//! always runs the cost-optimal variant so the returned plan is cheapest.
//!
//! # Examples
//! ```
//! use courier_core::{Algorithm, Strategy};
//!
//! let algorithm: Algorithm = "astar".parse().expect("known algorithm");
//! assert_eq!(algorithm, Algorithm::AStar);
//! assert_eq!(Strategy::from(Algorithm::Bfs), Strategy::CostOptimalBfs);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Search algorithm chosen through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    /// Breadth-first enumeration, run in its cost-optimal form.
    Bfs,
    /// Best-first search with an admissible heuristic.
    #[default]
    AStar,
}

impl Algorithm {
    /// Return the canonical configuration spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::AStar => "ASTAR",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a configuration names an unknown algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{name}' (expected BFS or ASTAR)")]
pub struct UnknownAlgorithmError {
    /// The rejected value, as supplied.
    pub name: String,
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BFS" => Ok(Self::Bfs),
            "ASTAR" | "A*" => Ok(Self::AStar),
            _ => Err(UnknownAlgorithmError { name: s.to_owned() }),
        }
    }
}

/// Concrete search driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// FIFO enumeration returning the first terminal state dequeued.
    Bfs,
    /// FIFO enumeration keeping the cheapest terminal state.
    CostOptimalBfs,
    /// Best-first search with dominance pruning.
    AStar,
}

impl Strategy {
    /// Return a short, stable name for logs and reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::CostOptimalBfs => "cost_optimal_bfs",
            Self::AStar => "a_star",
        }
    }
}

impl From<Algorithm> for Strategy {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bfs => Self::CostOptimalBfs,
            Algorithm::AStar => Self::AStar,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
