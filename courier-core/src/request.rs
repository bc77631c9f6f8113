//! Transport requests and identity-keyed request sets.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::Location;

/// Identity of a transport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// A transport order: carry `weight` units from `pickup` to `delivery`.
///
/// Two requests with the same locations and weight are still different
/// requests when their identities differ.
///
/// # Examples
/// ```
/// use courier_core::{Location, Request};
///
/// let request = Request::new(1, Location::new(0), Location::new(4), 10);
/// assert_eq!(request.id.get(), 1);
/// assert_eq!(request.weight, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Request {
    /// Identity used for set membership.
    pub id: RequestId,
    /// Where the load waits.
    pub pickup: Location,
    /// Where the load must end up.
    pub delivery: Location,
    /// Weight in the carrier's capacity units.
    pub weight: u32,
}

impl Request {
    /// Construct a request from raw parts.
    pub const fn new(id: u64, pickup: Location, delivery: Location, weight: u32) -> Self {
        Self {
            id: RequestId::new(id),
            pickup,
            delivery,
            weight,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} to {}, weight {}",
            self.id, self.pickup, self.delivery, self.weight
        )
    }
}

/// A set of requests keyed by identity.
///
/// Equality and hashing only look at the identities held, so two sets
/// containing the same requests compare equal regardless of insertion order.
/// Iteration is in ascending identity order.
///
/// # Examples
/// ```
/// use courier_core::{Location, Request, RequestSet};
///
/// let a = Request::new(1, Location::new(0), Location::new(1), 5);
/// let b = Request::new(2, Location::new(1), Location::new(2), 7);
/// let forward: RequestSet = [a, b].into_iter().collect();
/// let backward: RequestSet = [b, a].into_iter().collect();
///
/// assert_eq!(forward, backward);
/// assert_eq!(forward.total_weight(), 12);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Request>", into = "Vec<Request>")]
pub struct RequestSet {
    requests: BTreeMap<RequestId, Request>,
}

impl RequestSet {
    /// Construct an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a request, returning the previous entry with the same identity.
    pub fn insert(&mut self, request: Request) -> Option<Request> {
        match self.requests.entry(request.id) {
            Entry::Occupied(mut entry) => Some(entry.insert(request)),
            Entry::Vacant(entry) => {
                entry.insert(request);
                None
            }
        }
    }

    /// Remove the request with identity `id`.
    pub fn remove(&mut self, id: RequestId) -> Option<Request> {
        self.requests.remove(&id)
    }

    /// Whether a request with identity `id` is present.
    pub fn contains(&self, id: RequestId) -> bool {
        self.requests.contains_key(&id)
    }

    /// Look up a request by identity.
    pub fn get(&self, id: RequestId) -> Option<&Request> {
        self.requests.get(&id)
    }

    /// Number of requests held.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether the set holds no requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Iterate requests in ascending identity order.
    pub fn iter(&self) -> impl Iterator<Item = &Request> + '_ {
        self.requests.values()
    }

    /// Iterate identities in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = RequestId> + '_ {
        self.requests.keys().copied()
    }

    /// Sum of all request weights.
    pub fn total_weight(&self) -> u64 {
        self.requests.values().map(|r| u64::from(r.weight)).sum()
    }
}

impl PartialEq for RequestSet {
    fn eq(&self, other: &Self) -> bool {
        self.requests.len() == other.requests.len()
            && self.requests.keys().eq(other.requests.keys())
    }
}

impl Eq for RequestSet {}

impl Hash for RequestSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.requests.len().hash(state);
        for id in self.requests.keys() {
            id.hash(state);
        }
    }
}

impl FromIterator<Request> for RequestSet {
    fn from_iter<I: IntoIterator<Item = Request>>(iter: I) -> Self {
        let mut set = Self::new();
        for request in iter {
            set.insert(request);
        }
        set
    }
}

impl From<Vec<Request>> for RequestSet {
    fn from(requests: Vec<Request>) -> Self {
        requests.into_iter().collect()
    }
}

impl From<RequestSet> for Vec<Request> {
    fn from(set: RequestSet) -> Self {
        set.requests.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a RequestSet {
    type Item = &'a Request;
    type IntoIter = std::collections::btree_map::Values<'a, RequestId, Request>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(set: &RequestSet) -> u64 {
        let mut hasher = DefaultHasher::new();
        set.hash(&mut hasher);
        hasher.finish()
    }

    #[fixture]
    fn twins() -> (Request, Request) {
        let first = Request::new(1, Location::new(0), Location::new(1), 5);
        let second = Request::new(2, Location::new(0), Location::new(1), 5);
        (first, second)
    }

    #[rstest]
    fn identical_payloads_remain_distinct(twins: (Request, Request)) {
        let (first, second) = twins;
        let set: RequestSet = [first, second].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(first.id));
        assert!(set.contains(second.id));
    }

    #[rstest]
    fn equality_ignores_insertion_order(twins: (Request, Request)) {
        let (first, second) = twins;
        let forward: RequestSet = [first, second].into_iter().collect();
        let backward: RequestSet = [second, first].into_iter().collect();
        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[rstest]
    fn subsets_are_not_equal(twins: (Request, Request)) {
        let (first, second) = twins;
        let both: RequestSet = [first, second].into_iter().collect();
        let one: RequestSet = [first].into_iter().collect();
        assert_ne!(both, one);
    }

    #[rstest]
    fn insert_replaces_same_identity(twins: (Request, Request)) {
        let (first, _) = twins;
        let mut set = RequestSet::new();
        assert!(set.insert(first).is_none());
        let heavier = Request { weight: 9, ..first };
        assert_eq!(set.insert(heavier), Some(first));
        assert_eq!(set.total_weight(), 9);
    }

    #[rstest]
    fn remove_returns_request(twins: (Request, Request)) {
        let (first, second) = twins;
        let mut set: RequestSet = [first, second].into_iter().collect();
        assert_eq!(set.remove(first.id), Some(first));
        assert!(set.remove(first.id).is_none());
        assert_eq!(set.ids().collect::<Vec<_>>(), vec![second.id]);
    }

    #[test]
    fn serialises_as_list() {
        let set: RequestSet = [Request::new(4, Location::new(1), Location::new(2), 3)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).expect("serialise set");
        let back: RequestSet = serde_json::from_str(&json).expect("deserialise set");
        assert_eq!(back, set);
        assert!(json.starts_with('['));
    }
}
