use core::fmt;
use core::iter::FusedIterator;

use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::adj_graph::{AdjGraph, VertexRef};
use crate::graph::bounds::{Vertex, Weight};

/// A steppable Depth-First Search (DFS) cursor.
///
/// The start vertex is current right after construction and all of its
/// neighbors sit on the frontier stack. Advancing pops entries until an
/// unvisited vertex turns up, makes it current and pushes its unvisited
/// neighbors in ascending order, so the largest neighbor is explored first.
///
/// When the stack runs dry the cursor enters a terminal state: `current`
/// reports [`GraphError::CursorExhausted`] and further advances are no-ops.
#[derive(Clone)]
pub struct Dfs<'g, V: Vertex, E> {
    graph: &'g AdjGraph<V, E>,
    visited: VisitedSet<V>,
    stack: Vec<V>,
    current: Option<V>,
}

impl<'g, V: Vertex, E: Weight> Dfs<'g, V, E> {
    /// Creates a cursor positioned on `start`.
    pub fn new(start: VertexRef<'g, V, E>) -> Self {
        let graph = start.graph();
        let mut visited = VisitedSet::with_capacity(graph.size());
        visited.mark(start.vertex());

        let stack = start.adjacency().neighbors().cloned().collect();

        Self {
            graph,
            visited,
            stack,
            current: Some(start.vertex().clone()),
        }
    }

    /// The vertex the cursor is positioned on.
    ///
    /// # Errors
    /// Returns [`GraphError::CursorExhausted`] once the traversal is finished.
    pub fn current(&self) -> Result<VertexRef<'g, V, E>> {
        self.current
            .as_ref()
            .and_then(|vertex| self.graph.find(vertex))
            .ok_or(GraphError::CursorExhausted)
    }

    /// Moves to the next vertex and returns it, or `None` once exhausted.
    ///
    /// Advancing an exhausted cursor does nothing.
    pub fn advance(&mut self) -> Option<VertexRef<'g, V, E>> {
        self.current.as_ref()?;

        while let Some(vertex) = self.stack.pop() {
            if !self.visited.try_visit(&vertex) {
                continue;
            }

            if let Some(adjacency) = self.graph.adjacency(&vertex) {
                for neighbor in adjacency.neighbors() {
                    if !self.visited.is_visited(neighbor) {
                        self.stack.push(neighbor.clone());
                    }
                }
            }

            self.current = Some(vertex);
            return self.current().ok();
        }

        trace_event!(visited = self.visited.len(), "dfs exhausted");
        self.current = None;
        None
    }

    /// Returns `true` once every reachable vertex has been emitted.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// Number of entries on the frontier stack. May include vertices that
    /// were discovered again after being pushed.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.stack.len()
    }

    /// Number of vertices emitted so far, including the current one.
    #[inline]
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if both cursors are over the same graph and positioned
    /// on the same vertex, regardless of the rest of their state.
    pub fn same_position(&self, other: &Self) -> bool {
        core::ptr::eq(self.graph, other.graph) && self.current == other.current
    }
}

impl<'g, V: Vertex, E: Weight> Iterator for Dfs<'g, V, E> {
    type Item = VertexRef<'g, V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current().ok()?;
        self.advance();
        Some(entry)
    }
}

impl<V: Vertex, E: Weight> FusedIterator for Dfs<'_, V, E> {}

/// Cursors are equal when they walk the same graph with identical frontier,
/// visited set and position.
impl<V: Vertex, E> PartialEq for Dfs<'_, V, E> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.graph, other.graph)
            && self.current == other.current
            && self.stack == other.stack
            && self.visited == other.visited
    }
}

impl<V: Vertex, E> fmt::Debug for Dfs<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfs")
            .field("current", &self.current)
            .field("stack", &self.stack)
            .field("discovered", &self.visited.len())
            .finish()
    }
}
