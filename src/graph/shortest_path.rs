//! Single-source shortest paths (Dijkstra).
//!
//! The pending set is a `BTreeSet<(cost, vertex)>`: ordered by cost, then by
//! vertex identity. Decrease-key is done by removing the stale
//! `(old_cost, vertex)` pair and inserting the improved one, so every vertex
//! has at most one pending entry at any time.

use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::adj_graph::AdjGraph;
use crate::graph::bounds::{Vertex, Weight};

/// Shortest-path record for one vertex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathEntry<V, E> {
    /// The vertex this one is reached from on a shortest path. The source is
    /// its own predecessor; unreached vertices have none, which is what marks
    /// them unreached.
    pub predecessor: Option<V>,
    /// Minimal cumulative weight from the source, or [`Weight::infinity`] if
    /// unreached. A reached vertex may legitimately cost exactly the sentinel.
    pub cost: E,
}

impl<V, E: Weight> PathEntry<V, E> {
    fn unreached() -> Self {
        Self {
            predecessor: None,
            cost: E::infinity(),
        }
    }

    /// Returns `true` if the source reaches this vertex.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.predecessor.is_some()
    }
}

/// The result of one Dijkstra run: a [`PathEntry`] for every vertex the
/// graph had at the time, keyed in ascending vertex order.
///
/// Fully owned; it does not borrow the graph it was computed from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShortestPaths<V, E> {
    source: V,
    entries: BTreeMap<V, PathEntry<V, E>>,
}

impl<V: Vertex, E: Weight> ShortestPaths<V, E> {
    /// The vertex the paths start from.
    #[inline]
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Number of vertices covered, reachable or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no vertex is covered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The full record for `v`, or `None` if `v` was not a vertex.
    pub fn get(&self, v: &V) -> Option<&PathEntry<V, E>> {
        self.entries.get(v)
    }

    /// Minimal cost from the source to `v`, or `None` if unreachable.
    pub fn cost(&self, v: &V) -> Option<E> {
        self.get(v)
            .filter(|entry| entry.is_reachable())
            .map(|entry| entry.cost)
    }

    /// Predecessor of `v` on a shortest path, or `None` if unreachable.
    pub fn predecessor(&self, v: &V) -> Option<&V> {
        self.get(v).and_then(|entry| entry.predecessor.as_ref())
    }

    /// Returns `true` if the source reaches `v`.
    pub fn is_reachable(&self, v: &V) -> bool {
        self.cost(v).is_some()
    }

    /// The vertices on a shortest path from the source to `v`, both included.
    ///
    /// Returns `None` if `v` is unreachable or not a vertex.
    pub fn path_to(&self, v: &V) -> Option<Vec<V>> {
        if !self.is_reachable(v) {
            return None;
        }

        let mut path = vec![v.clone()];
        let mut current = v;
        while *current != self.source {
            current = self.predecessor(current)?;
            path.push(current.clone());
            if path.len() > self.entries.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Iterates `(vertex, entry)` pairs in ascending vertex order.
    pub fn iter(&self) -> btree_map::Iter<'_, V, PathEntry<V, E>> {
        self.entries.iter()
    }
}

impl<'a, V, E> IntoIterator for &'a ShortestPaths<V, E> {
    type Item = (&'a V, &'a PathEntry<V, E>);
    type IntoIter = btree_map::Iter<'a, V, PathEntry<V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Computes the shortest path from `source` to every vertex of `graph`.
///
/// Every vertex gets a [`PathEntry`]; vertices in other components keep an
/// infinite cost and no predecessor. Path costs that would overflow the
/// weight type are treated as unreachable.
///
/// # Errors
/// - [`GraphError::VertexNotFound`] if `source` is not a vertex of `graph`.
/// - [`GraphError::NegativeWeight`] if any edge weighs less than `E::default()`.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables, unused_assignments))]
pub fn dijkstra<V: Vertex, E: Weight>(
    graph: &AdjGraph<V, E>,
    source: &V,
) -> Result<ShortestPaths<V, E>> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    let zero = E::default();
    for entry in graph {
        if let Some((neighbor, _)) = entry.neighbors().find(|(_, weight)| **weight < zero) {
            return Err(GraphError::negative_weight(entry.vertex(), neighbor));
        }
    }

    let mut entries: BTreeMap<V, PathEntry<V, E>> = graph
        .vertices()
        .map(|v| (v.clone(), PathEntry::unreached()))
        .collect();
    entries.insert(
        source.clone(),
        PathEntry {
            predecessor: Some(source.clone()),
            cost: zero,
        },
    );

    let mut pending: BTreeSet<(E, V)> = BTreeSet::new();
    pending.insert((zero, source.clone()));
    debug_event!(source = ?source, vertices = entries.len(), "dijkstra start");

    let mut settled = 0usize;
    while let Some((cost, vertex)) = pending.pop_first() {
        settled += 1;
        let Some(adjacency) = graph.adjacency(&vertex) else {
            continue;
        };

        for (neighbor, weight) in adjacency {
            // An overflowing sum can never beat a finite cost.
            let Some(candidate) = cost.checked_add(weight) else {
                continue;
            };
            let Some(entry) = entries.get_mut(neighbor) else {
                continue;
            };

            // The cost alone cannot tell "unreached" from "reached at the sentinel".
            if !entry.is_reachable() || candidate < entry.cost {
                if entry.is_reachable() {
                    pending.remove(&(entry.cost, neighbor.clone()));
                }
                entry.cost = candidate;
                entry.predecessor = Some(vertex.clone());
                pending.insert((candidate, neighbor.clone()));
            }
        }
    }

    debug_event!(
        source = ?source,
        settled,
        "dijkstra finished"
    );

    Ok(ShortestPaths {
        source: source.clone(),
        entries,
    })
}
