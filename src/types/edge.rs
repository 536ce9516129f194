//! Edge: a labeled connection with explicit identity for unique edges.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use super::Label;

/// Identifier carried by every non-unique edge.
pub const SHARED_EDGE_ID: u64 = 0;

/// Process-wide source of unique edge identifiers. Starts at 1 so that no
/// unique edge can collide with `SHARED_EDGE_ID`.
static NEXT_UNIQUE_ID: AtomicU64 = AtomicU64::new(1);

fn next_unique_id() -> u64 {
    NEXT_UNIQUE_ID.fetch_add(1, AtomicOrdering::Relaxed)
}

/// A labeled edge.
///
/// Non-unique edges are identified by their label alone, so adding the same
/// label twice collapses to one edge. Unique edges draw a fresh id at
/// construction and never compare equal to any other edge.
///
/// `is_self_loop` is recorded but does not take part in equality, hashing
/// or ordering.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    label: E,
    id: u64,
    is_unique: bool,
    is_self_loop: bool,
}

impl<E: Label> Edge<E> {
    /// A non-unique, non-self-loop edge. Equal to every other shared edge
    /// with the same label.
    pub fn shared(label: E) -> Self {
        Self {
            label,
            id: SHARED_EDGE_ID,
            is_unique: false,
            is_self_loop: false,
        }
    }

    pub(crate) fn new(label: E, is_unique: bool, is_self_loop: bool) -> Self {
        let id = if is_unique {
            next_unique_id()
        } else {
            SHARED_EDGE_ID
        };
        Self {
            label,
            id,
            is_unique,
            is_self_loop,
        }
    }

    /// The caller-supplied label.
    pub fn label(&self) -> &E {
        &self.label
    }

    /// `SHARED_EDGE_ID` for non-unique edges, a process-unique id otherwise.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_unique(&self) -> bool {
        self.is_unique
    }

    /// True iff the edge was added with identical source and destination.
    pub fn is_self_loop(&self) -> bool {
        self.is_self_loop
    }
}

impl<E: PartialEq> PartialEq for Edge<E> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.id == other.id && self.is_unique == other.is_unique
    }
}

impl<E: Eq> Eq for Edge<E> {}

impl<E: Hash> Hash for Edge<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
        self.id.hash(state);
        self.is_unique.hash(state);
    }
}

impl<E: Ord> PartialOrd for Edge<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Ord> Ord for Edge<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label
            .cmp(&other.label)
            .then(self.is_unique.cmp(&other.is_unique))
            .then(self.id.cmp(&other.id))
    }
}

impl<E: fmt::Display> fmt::Display for Edge<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
