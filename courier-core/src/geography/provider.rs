//! Geography trait consumed by successor generation and heuristics.

use crate::Location;

/// Price and route moves between two locations.
///
/// Implementations must be deterministic and symmetric for the same pair of
/// locations within one planning call. `distance` is non-negative.
/// `shortest_path` returns the locations strictly between `from` and `to`, in
/// travel order; it is empty when the two are adjacent or equal.
///
/// # Examples
///
/// ```rust
/// use courier_core::{Geography, Location};
///
/// /// Locations laid out on a number line, one unit apart.
/// struct Line;
///
/// impl Geography for Line {
///     fn distance(&self, from: Location, to: Location) -> f64 {
///         f64::from(from.id().abs_diff(to.id()))
///     }
///
///     fn shortest_path(&self, from: Location, to: Location) -> Vec<Location> {
///         let (lo, hi) = (from.id().min(to.id()), from.id().max(to.id()));
///         let mut between: Vec<Location> = (lo + 1..hi).map(Location::new).collect();
///         if from.id() > to.id() {
///             between.reverse();
///         }
///         between
///     }
/// }
///
/// assert_eq!(Line.distance(Location::new(1), Location::new(4)), 3.0);
/// assert_eq!(
///     Line.shortest_path(Location::new(1), Location::new(4)),
///     vec![Location::new(2), Location::new(3)],
/// );
/// ```
pub trait Geography {
    /// Length of the shortest route from `from` to `to`.
    fn distance(&self, from: Location, to: Location) -> f64;

    /// Intermediate locations of the shortest route from `from` to `to`.
    fn shortest_path(&self, from: Location, to: Location) -> Vec<Location>;
}

impl<G: Geography + ?Sized> Geography for &G {
    fn distance(&self, from: Location, to: Location) -> f64 {
        (**self).distance(from, to)
    }

    fn shortest_path(&self, from: Location, to: Location) -> Vec<Location> {
        (**self).shortest_path(from, to)
    }
}

impl<G: Geography + ?Sized> Geography for std::sync::Arc<G> {
    fn distance(&self, from: Location, to: Location) -> f64 {
        (**self).distance(from, to)
    }

    fn shortest_path(&self, from: Location, to: Location) -> Vec<Location> {
        (**self).shortest_path(from, to)
    }
}
