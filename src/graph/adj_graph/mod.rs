//! Undirected weighted graph stored as a vertex table of neighbor sets.
//!
//! Vertical split:
//! - `vertex_ref`: borrowed vertex handles
//! - `display`: diagnostic text dump
//! - `tests`: module tests
//!
//! Every vertex is addressed by its identity. Handles and cursors hold shared
//! borrows of the graph, so the graph cannot be mutated while any of them is
//! alive.

use std::collections::hash_map::{self, HashMap};

use crate::error::{GraphError, Result};
use crate::graph::adjacency::Adjacency;
use crate::graph::bounds::{Vertex, Weight};
use crate::graph::shortest_path::{self, ShortestPaths};
use crate::graph::traversal::{Bfs, Dfs};

mod display;
mod vertex_ref;

pub use vertex_ref::VertexRef;

/// An undirected weighted graph with adjacency-list storage.
///
/// Each edge `(u, v, w)` is stored twice, as `v` in the neighbor set of `u`
/// and as `u` in the neighbor set of `v`, always with the same weight.
/// Vertices come into existence when an edge first mentions them and are
/// never removed implicitly.
#[derive(Clone, Debug)]
pub struct AdjGraph<V, E> {
    network: HashMap<V, Adjacency<V, E>>,
}

impl<V, E> AdjGraph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            network: HashMap::new(),
        }
    }

    /// Pre-allocate for a known number of vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            network: HashMap::with_capacity(vertex_count),
        }
    }

    /// Number of vertices (not edges).
    #[inline]
    pub fn size(&self) -> usize {
        self.network.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.network.is_empty()
    }

    /// Iterates every vertex identity, in unspecified order.
    pub fn vertices(&self) -> hash_map::Keys<'_, V, Adjacency<V, E>> {
        self.network.keys()
    }

    /// Iterates every vertex with its neighbor set, in unspecified order.
    pub fn iter(&self) -> Iter<'_, V, E> {
        Iter {
            graph: self,
            inner: self.network.iter(),
        }
    }
}

impl<V: Vertex, E: Weight> AdjGraph<V, E> {
    /// Adds the undirected edge `(u, v, weight)`, creating either vertex if absent.
    ///
    /// If `u` and `v` are already connected the existing weight is kept and
    /// `false` is returned; use [`AdjGraph::modify_edge`] to overwrite it.
    pub fn add_edge(&mut self, u: V, v: V, weight: E) -> bool {
        let inserted = self
            .network
            .entry(v.clone())
            .or_default()
            .insert(u.clone(), weight);
        debug_event!(from = ?u, to = ?v, ?weight, inserted, "add edge");
        self.network.entry(u).or_default().insert(v, weight);
        inserted
    }

    /// Adds `(u, v)` with the default weight.
    pub fn add_default_edge(&mut self, u: V, v: V) -> bool {
        self.add_edge(u, v, E::default())
    }

    /// Removes the edge between `u` and `v`, returning its weight.
    ///
    /// A missing edge is a no-op. Vertices left without neighbors stay in
    /// the graph.
    pub fn delete_edge(&mut self, u: &V, v: &V) -> Option<E> {
        let removed = self.network.get_mut(u).and_then(|adj| adj.remove(v));
        if let Some(adj) = self.network.get_mut(v) {
            adj.remove(u);
        }
        debug_event!(from = ?u, to = ?v, removed = removed.is_some(), "delete edge");
        removed
    }

    /// Replaces the weight of the edge between `u` and `v`.
    ///
    /// Equivalent to [`AdjGraph::delete_edge`] followed by
    /// [`AdjGraph::add_edge`], so the edge and its endpoints are created if
    /// they did not exist. Returns the previous weight, if any.
    pub fn modify_edge(&mut self, u: V, v: V, new_weight: E) -> Option<E> {
        let previous = self.delete_edge(&u, &v);
        debug_event!(from = ?u, to = ?v, ?previous, ?new_weight, "modify edge");
        self.add_edge(u, v, new_weight);
        previous
    }

    /// Looks up a vertex, returning a handle usable as a traversal start.
    ///
    /// Returns `None` if `v` is not a vertex of the graph.
    pub fn find(&self, v: &V) -> Option<VertexRef<'_, V, E>> {
        self.network
            .get_key_value(v)
            .map(|(vertex, adjacency)| VertexRef::new(self, vertex, adjacency))
    }

    /// Returns `true` if `v` is a vertex of the graph.
    #[inline]
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.network.contains_key(v)
    }

    /// Returns `true` if `u` and `v` are connected by an edge.
    #[inline]
    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Weight of the edge between `u` and `v`, if connected.
    pub fn edge_weight(&self, u: &V, v: &V) -> Option<E> {
        self.network.get(u).and_then(|adj| adj.weight_to(v))
    }

    /// Number of neighbors of `v`, or `None` if `v` is not a vertex.
    pub fn degree(&self, v: &V) -> Option<usize> {
        self.network.get(v).map(Adjacency::len)
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let (entries, loops) = self
            .network
            .iter()
            .fold((0, 0), |(entries, loops), (vertex, adj)| {
                (entries + adj.len(), loops + usize::from(adj.contains(vertex)))
            });
        (entries + loops) / 2
    }

    /// Breadth-first cursor starting at `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex.
    pub fn bfs(&self, start: &V) -> Result<Bfs<'_, V, E>> {
        self.find(start)
            .map(Bfs::new)
            .ok_or_else(|| GraphError::vertex_not_found(start))
    }

    /// Depth-first cursor starting at `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex.
    pub fn dfs(&self, start: &V) -> Result<Dfs<'_, V, E>> {
        self.find(start)
            .map(Dfs::new)
            .ok_or_else(|| GraphError::vertex_not_found(start))
    }

    /// Single-source shortest paths from `source`. See [`shortest_path::dijkstra`].
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `source` is not a vertex and
    /// [`GraphError::NegativeWeight`] if any edge weight is negative.
    pub fn dijkstra(&self, source: &V) -> Result<ShortestPaths<V, E>> {
        shortest_path::dijkstra(self, source)
    }

    pub(crate) fn adjacency(&self, v: &V) -> Option<&Adjacency<V, E>> {
        self.network.get(v)
    }
}

impl<V, E> Default for AdjGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, E: Weight> Extend<(V, V, E)> for AdjGraph<V, E> {
    fn extend<I: IntoIterator<Item = (V, V, E)>>(&mut self, edges: I) {
        for (u, v, weight) in edges {
            self.add_edge(u, v, weight);
        }
    }
}

impl<V: Vertex, E: Weight> FromIterator<(V, V, E)> for AdjGraph<V, E> {
    fn from_iter<I: IntoIterator<Item = (V, V, E)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

/// Iterator over the vertices of an [`AdjGraph`], as [`VertexRef`] handles.
pub struct Iter<'g, V, E> {
    graph: &'g AdjGraph<V, E>,
    inner: hash_map::Iter<'g, V, Adjacency<V, E>>,
}

impl<'g, V, E> Iterator for Iter<'g, V, E> {
    type Item = VertexRef<'g, V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, adjacency) = self.inner.next()?;
        Some(VertexRef::new(self.graph, vertex, adjacency))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, E> ExactSizeIterator for Iter<'_, V, E> {}

impl<'g, V, E> IntoIterator for &'g AdjGraph<V, E> {
    type Item = VertexRef<'g, V, E>;
    type IntoIter = Iter<'g, V, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
