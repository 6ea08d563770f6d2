use core::fmt;
use std::collections::btree_map;

use crate::graph::adjacency::Adjacency;
use crate::graph::bounds::{Vertex, Weight};
use crate::graph::traversal::{Bfs, Dfs};

use super::AdjGraph;

/// A borrowed handle to one vertex and its neighbor set.
///
/// This is what [`AdjGraph::find`] returns and what the cursors yield. It
/// carries the graph it came from, so a traversal started from it is always
/// bound to the right graph.
pub struct VertexRef<'g, V, E> {
    graph: &'g AdjGraph<V, E>,
    vertex: &'g V,
    adjacency: &'g Adjacency<V, E>,
}

impl<'g, V, E> VertexRef<'g, V, E> {
    pub(crate) fn new(
        graph: &'g AdjGraph<V, E>,
        vertex: &'g V,
        adjacency: &'g Adjacency<V, E>,
    ) -> Self {
        Self {
            graph,
            vertex,
            adjacency,
        }
    }

    /// The vertex identity.
    #[inline]
    pub fn vertex(&self) -> &'g V {
        self.vertex
    }

    /// The full neighbor set.
    #[inline]
    pub fn adjacency(&self) -> &'g Adjacency<V, E> {
        self.adjacency
    }

    /// `(neighbor, weight)` pairs in ascending neighbor order.
    #[inline]
    pub fn neighbors(&self) -> btree_map::Iter<'g, V, E> {
        self.adjacency.iter()
    }

    /// Number of neighbors.
    #[inline]
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// The graph this handle points into.
    #[inline]
    pub fn graph(&self) -> &'g AdjGraph<V, E> {
        self.graph
    }
}

impl<'g, V: Vertex, E: Weight> VertexRef<'g, V, E> {
    /// Weight of the edge to `neighbor`, if connected.
    #[inline]
    pub fn weight_to(&self, neighbor: &V) -> Option<E> {
        self.adjacency.weight_to(neighbor)
    }

    /// Breadth-first cursor starting here.
    pub fn bfs(self) -> Bfs<'g, V, E> {
        Bfs::new(self)
    }

    /// Depth-first cursor starting here.
    pub fn dfs(self) -> Dfs<'g, V, E> {
        Dfs::new(self)
    }
}

impl<V, E> Clone for VertexRef<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for VertexRef<'_, V, E> {}

/// Handles are equal when they point at the same vertex of the same graph.
impl<V: PartialEq, E> PartialEq for VertexRef<'_, V, E> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.graph, other.graph) && self.vertex == other.vertex
    }
}

impl<V: Eq, E> Eq for VertexRef<'_, V, E> {}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for VertexRef<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexRef")
            .field("vertex", self.vertex)
            .field("neighbors", self.adjacency)
            .finish()
    }
}
