//! Opaque handles for points of the road network.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point of the network the carrier can stand on.
///
/// The handle is a plain numeric identifier; its meaning (city, depot,
/// crossing) belongs to whichever [`Geography`](crate::Geography) resolves it.
///
/// # Examples
/// ```
/// use courier_core::Location;
///
/// let depot = Location::new(7);
/// assert_eq!(depot.id(), 7);
/// assert_eq!(depot.to_string(), "L7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(u32);

impl Location {
    /// Wrap a raw identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl From<u32> for Location {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}
