//! Test-only geography and request helpers used by unit and behaviour
//! tests.

use crate::{Geography, Location, Request};

/// Locations laid out on a number line, one distance unit apart.
///
/// `distance(a, b) == |a - b|` and the shortest path from `a` to `b` visits
/// every integer strictly between them.
#[derive(Default, Debug, Copy, Clone)]
pub struct LineGeography;

impl Geography for LineGeography {
    fn distance(&self, from: Location, to: Location) -> f64 {
        f64::from(from.id().abs_diff(to.id()))
    }

    fn shortest_path(&self, from: Location, to: Location) -> Vec<Location> {
        let (a, b) = (from.id(), to.id());
        if a <= b {
            (a.saturating_add(1)..b).map(Location::new).collect()
        } else {
            (b.saturating_add(1)..a).rev().map(Location::new).collect()
        }
    }
}

/// Shorthand for [`Location::new`].
#[must_use]
pub const fn loc(id: u32) -> Location {
    Location::new(id)
}

/// Construct a request between two raw location identifiers.
#[must_use]
pub const fn request(id: u64, pickup: u32, delivery: u32, weight: u32) -> Request {
    Request::new(id, Location::new(pickup), Location::new(delivery), weight)
}
