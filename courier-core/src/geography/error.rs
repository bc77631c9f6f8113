use thiserror::Error;

use crate::Location;

/// Errors from [`crate::geography::Topology::new`] and
/// [`crate::geography::Topology::ensure_covers`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// Two cities share the same location handle.
    #[error("city {location} is declared more than once")]
    DuplicateCity {
        /// The repeated handle.
        location: Location,
    },
    /// A road references a city that was not declared.
    #[error("road endpoint {location} is not a declared city")]
    UnknownEndpoint {
        /// The undeclared handle.
        location: Location,
    },
    /// A road length is negative, NaN or infinite.
    #[error("road from {from} to {to} has invalid length {length}")]
    InvalidLength {
        /// First endpoint.
        from: Location,
        /// Second endpoint.
        to: Location,
        /// The rejected length.
        length: f64,
    },
    /// A plan request names a location that is not a declared city.
    #[error("location {location} used by the plan request is not a declared city")]
    UnknownLocation {
        /// The undeclared handle.
        location: Location,
    },
    /// Some city cannot be reached from another.
    ///
    /// Every pair of cities must be connected so that any request can be
    /// served.
    #[error("city {to} cannot be reached from {from}")]
    Disconnected {
        /// Source city.
        from: Location,
        /// Unreachable city.
        to: Location,
    },
}
