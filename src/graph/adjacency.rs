//! Per-vertex neighbor sets.
//!
//! An `Adjacency` is a set of `(neighbor, weight)` pairs keyed by neighbor
//! identity alone: the weight is payload, not part of the key. Inserting a
//! neighbor that is already present keeps the existing weight.

use std::collections::btree_map::{self, BTreeMap};

use crate::graph::bounds::{Vertex, Weight};

/// The neighbor set of one vertex, ordered by neighbor identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adjacency<V, E> {
    neighbors: BTreeMap<V, E>,
}

impl<V, E> Adjacency<V, E> {
    /// Creates an empty neighbor set.
    pub fn new() -> Self {
        Self {
            neighbors: BTreeMap::new(),
        }
    }

    /// Number of neighbors.
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if the vertex has no neighbors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Iterates `(neighbor, weight)` pairs in ascending neighbor order.
    pub fn iter(&self) -> btree_map::Iter<'_, V, E> {
        self.neighbors.iter()
    }

    /// Iterates neighbor identities in ascending order.
    pub fn neighbors(&self) -> btree_map::Keys<'_, V, E> {
        self.neighbors.keys()
    }
}

impl<V: Vertex, E: Weight> Adjacency<V, E> {
    /// Inserts `(neighbor, weight)` unless `neighbor` is already present.
    ///
    /// Returns `true` if the pair was inserted. An existing pair keeps its
    /// original weight.
    pub fn insert(&mut self, neighbor: V, weight: E) -> bool {
        match self.neighbors.entry(neighbor) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(weight);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Removes `neighbor`, returning its weight if it was present.
    pub fn remove(&mut self, neighbor: &V) -> Option<E> {
        self.neighbors.remove(neighbor)
    }

    /// Returns `true` if `neighbor` is in the set.
    #[inline]
    pub fn contains(&self, neighbor: &V) -> bool {
        self.neighbors.contains_key(neighbor)
    }

    /// Weight of the edge to `neighbor`, if present.
    #[inline]
    pub fn weight_to(&self, neighbor: &V) -> Option<E> {
        self.neighbors.get(neighbor).copied()
    }

    /// The neighbor reached by the heaviest edge, ties broken by the smallest neighbor.
    pub fn heaviest(&self) -> Option<(&V, E)> {
        self.neighbors
            .iter()
            .fold(None, |best: Option<(&V, E)>, (v, &w)| match best {
                Some((_, bw)) if bw >= w => best,
                _ => Some((v, w)),
            })
    }
}

impl<V, E> Default for Adjacency<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V, E> IntoIterator for &'a Adjacency<V, E> {
    type Item = (&'a V, &'a E);
    type IntoIter = btree_map::Iter<'a, V, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
