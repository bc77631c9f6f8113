//! Road-graph geography with precomputed all-pairs shortest paths.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::{Deserialize, Serialize};

use super::error::TopologyError;
use super::provider::Geography;
use crate::{Location, PlanRequest};

/// A named point of the road network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Handle used by requests and plans.
    pub id: Location,
    /// Human readable name.
    pub name: String,
}

/// An undirected road between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// First endpoint.
    pub from: Location,
    /// Second endpoint.
    pub to: Location,
    /// Road length in distance units.
    pub length: f64,
}

/// Serialisable description of a road network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologySpec {
    /// Cities of the network.
    pub cities: Vec<City>,
    /// Roads connecting the cities.
    #[serde(default)]
    pub roads: Vec<Road>,
}

/// A connected road network answering distance and path queries.
///
/// Shortest paths are computed once at construction with Dijkstra's
/// algorithm from every city, so queries are table lookups.
///
/// # Examples
/// ```
/// use courier_core::{City, Geography, Location, Road, Topology, TopologySpec};
///
/// # fn main() -> Result<(), courier_core::TopologyError> {
/// let city = |id: u32, name: &str| City { id: Location::new(id), name: name.into() };
/// let road = |from: u32, to: u32, length: f64| Road {
///     from: Location::new(from),
///     to: Location::new(to),
///     length,
/// };
/// let topology = Topology::new(TopologySpec {
///     cities: vec![city(0, "Bern"), city(1, "Fribourg"), city(2, "Lausanne")],
///     roads: vec![road(0, 1, 30.0), road(1, 2, 70.0), road(0, 2, 120.0)],
/// })?;
///
/// assert_eq!(topology.distance(Location::new(0), Location::new(2)), 100.0);
/// assert_eq!(
///     topology.shortest_path(Location::new(0), Location::new(2)),
///     vec![Location::new(1)],
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    cities: Vec<City>,
    index: HashMap<Location, usize>,
    distances: Vec<Vec<f64>>,
    predecessors: Vec<Vec<Option<usize>>>,
}

impl Topology {
    /// Validate `spec` and precompute shortest paths.
    pub fn new(spec: TopologySpec) -> Result<Self, TopologyError> {
        let TopologySpec { cities, roads } = spec;

        let mut index = HashMap::with_capacity(cities.len());
        for (position, city) in cities.iter().enumerate() {
            if index.insert(city.id, position).is_some() {
                return Err(TopologyError::DuplicateCity { location: city.id });
            }
        }

        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); cities.len()];
        for road in &roads {
            if !road.length.is_finite() || road.length < 0.0 {
                return Err(TopologyError::InvalidLength {
                    from: road.from,
                    to: road.to,
                    length: road.length,
                });
            }
            let from = lookup(&index, road.from)?;
            let to = lookup(&index, road.to)?;
            if let Some(edges) = adjacency.get_mut(from) {
                edges.push((to, road.length));
            }
            if let Some(edges) = adjacency.get_mut(to) {
                edges.push((from, road.length));
            }
        }

        let mut distances = Vec::with_capacity(cities.len());
        let mut predecessors = Vec::with_capacity(cities.len());
        for source in 0..cities.len() {
            let (dist, pred) = dijkstra(&adjacency, source);
            if let Some(unreachable) = dist.iter().position(|d| d.is_infinite()) {
                return Err(TopologyError::Disconnected {
                    from: city_id(&cities, source),
                    to: city_id(&cities, unreachable),
                });
            }
            distances.push(dist);
            predecessors.push(pred);
        }

        log::debug!(
            "built topology with {} cities and {} roads",
            cities.len(),
            roads.len()
        );

        Ok(Self {
            cities,
            index,
            distances,
            predecessors,
        })
    }

    /// Cities of the network in declaration order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Look up a city by handle.
    pub fn city(&self, location: Location) -> Option<&City> {
        self.index
            .get(&location)
            .and_then(|&position| self.cities.get(position))
    }

    /// Check that every location named by `request` is a declared city.
    ///
    /// The carrier position is checked first, then pickup and delivery
    /// locations of available requests, then those of carried requests.
    ///
    /// # Errors
    /// Returns [`TopologyError::UnknownLocation`] for the first undeclared
    /// location.
    pub fn ensure_covers(&self, request: &PlanRequest) -> Result<(), TopologyError> {
        let locations = std::iter::once(request.carrier.position).chain(
            request
                .available
                .iter()
                .chain(&request.carried)
                .flat_map(|parcel| [parcel.pickup, parcel.delivery]),
        );
        for location in locations {
            if !self.index.contains_key(&location) {
                return Err(TopologyError::UnknownLocation { location });
            }
        }
        Ok(())
    }

    fn resolve(&self, from: Location, to: Location) -> Option<(usize, usize)> {
        match (self.index.get(&from), self.index.get(&to)) {
            (Some(&a), Some(&b)) => Some((a, b)),
            _ => {
                log::warn!("topology query for unknown location pair {from} -> {to}");
                None
            }
        }
    }
}

impl Geography for Topology {
    fn distance(&self, from: Location, to: Location) -> f64 {
        self.resolve(from, to)
            .and_then(|(a, b)| self.distances.get(a).and_then(|row| row.get(b)))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn shortest_path(&self, from: Location, to: Location) -> Vec<Location> {
        let Some((source, target)) = self.resolve(from, to) else {
            return Vec::new();
        };
        let Some(pred) = self.predecessors.get(source) else {
            return Vec::new();
        };

        let mut between = Vec::new();
        let mut cursor = pred.get(target).copied().flatten();
        while let Some(node) = cursor {
            if node == source {
                break;
            }
            between.push(city_id(&self.cities, node));
            cursor = pred.get(node).copied().flatten();
        }
        between.reverse();
        between
    }
}

fn lookup(index: &HashMap<Location, usize>, location: Location) -> Result<usize, TopologyError> {
    index
        .get(&location)
        .copied()
        .ok_or(TopologyError::UnknownEndpoint { location })
}

fn city_id(cities: &[City], position: usize) -> Location {
    cities
        .get(position)
        .map_or(Location::new(u32::MAX), |city| city.id)
}

#[derive(Debug, Clone, Copy)]
struct Tentative {
    distance: f64,
    node: usize,
}

impl PartialEq for Tentative {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Tentative {}

impl PartialOrd for Tentative {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tentative {
    // Reversed so the max-heap pops the shortest tentative distance first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

fn dijkstra(adjacency: &[Vec<(usize, f64)>], source: usize) -> (Vec<f64>, Vec<Option<usize>>) {
    let mut dist = vec![f64::INFINITY; adjacency.len()];
    let mut pred = vec![None; adjacency.len()];
    let mut heap = BinaryHeap::new();

    if let Some(slot) = dist.get_mut(source) {
        *slot = 0.0;
        heap.push(Tentative {
            distance: 0.0,
            node: source,
        });
    }

    while let Some(Tentative { distance, node }) = heap.pop() {
        if dist.get(node).is_some_and(|&best| distance > best) {
            continue;
        }
        for &(next, length) in adjacency.get(node).map_or(&[][..], Vec::as_slice) {
            let candidate = distance + length;
            if let Some(best) = dist.get_mut(next)
                && candidate < *best
            {
                *best = candidate;
                if let Some(slot) = pred.get_mut(next) {
                    *slot = Some(node);
                }
                heap.push(Tentative {
                    distance: candidate,
                    node: next,
                });
            }
        }
    }

    (dist, pred)
}
