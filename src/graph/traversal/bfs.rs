use core::fmt;
use core::iter::FusedIterator;
use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::adj_graph::{AdjGraph, VertexRef};
use crate::graph::bounds::{Vertex, Weight};

/// A steppable Breadth-First Search (BFS) cursor.
///
/// The vertex at the front of the frontier queue is the current position, so
/// the start vertex is current right after construction. Advancing dequeues
/// the front, enqueues its undiscovered neighbors in ascending order and
/// moves to the new front. Vertices are therefore emitted in BFS layer order,
/// ties broken by neighbor order.
#[derive(Clone)]
pub struct Bfs<'g, V: Vertex, E> {
    graph: &'g AdjGraph<V, E>,
    visited: VisitedSet<V>,
    queue: VecDeque<V>,
}

impl<'g, V: Vertex, E: Weight> Bfs<'g, V, E> {
    /// Creates a cursor positioned on `start`.
    pub fn new(start: VertexRef<'g, V, E>) -> Self {
        let graph = start.graph();
        let mut visited = VisitedSet::with_capacity(graph.size());
        visited.mark(start.vertex());

        let mut queue = VecDeque::new();
        queue.push_back(start.vertex().clone());

        Self {
            graph,
            visited,
            queue,
        }
    }

    /// The vertex the cursor is positioned on.
    ///
    /// # Errors
    /// Returns [`GraphError::CursorExhausted`] once the traversal is finished.
    pub fn current(&self) -> Result<VertexRef<'g, V, E>> {
        self.queue
            .front()
            .and_then(|vertex| self.graph.find(vertex))
            .ok_or(GraphError::CursorExhausted)
    }

    /// Moves to the next vertex and returns it, or `None` once exhausted.
    ///
    /// Advancing an exhausted cursor does nothing.
    pub fn advance(&mut self) -> Option<VertexRef<'g, V, E>> {
        let vertex = self.queue.pop_front()?;

        if let Some(adjacency) = self.graph.adjacency(&vertex) {
            for neighbor in adjacency.neighbors() {
                if self.visited.try_visit(neighbor) {
                    self.queue.push_back(neighbor.clone());
                }
            }
        }

        if self.queue.is_empty() {
            trace_event!(visited = self.visited.len(), "bfs exhausted");
        }
        self.current().ok()
    }

    /// Returns `true` once every reachable vertex has been emitted.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of discovered vertices not yet emitted, including the current one.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.queue.len()
    }

    /// Number of vertices discovered so far.
    #[inline]
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if both cursors are over the same graph and positioned
    /// on the same vertex, regardless of the rest of their state.
    pub fn same_position(&self, other: &Self) -> bool {
        core::ptr::eq(self.graph, other.graph) && self.queue.front() == other.queue.front()
    }
}

impl<'g, V: Vertex, E: Weight> Iterator for Bfs<'g, V, E> {
    type Item = VertexRef<'g, V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current().ok()?;
        self.advance();
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let undiscovered = self.graph.size() - self.visited.len();
        (self.queue.len(), Some(self.queue.len() + undiscovered))
    }
}

impl<V: Vertex, E: Weight> FusedIterator for Bfs<'_, V, E> {}

/// Cursors are equal when they walk the same graph with identical frontier
/// and visited state.
impl<V: Vertex, E> PartialEq for Bfs<'_, V, E> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.graph, other.graph)
            && self.queue == other.queue
            && self.visited == other.visited
    }
}

impl<V: Vertex, E> fmt::Debug for Bfs<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bfs")
            .field("queue", &self.queue)
            .field("discovered", &self.visited.len())
            .finish()
    }
}
