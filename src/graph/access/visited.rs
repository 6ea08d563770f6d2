//! Visited-vertex bookkeeping for graph traversals.
//!
//! Vertices are tracked by identity rather than by position, so a visited set
//! stays meaningful for as long as the graph it was built over is borrowed.

use std::collections::HashSet;

use crate::graph::bounds::Vertex;

/// The set of vertices a traversal has already discovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct VisitedSet<V: Vertex> {
    seen: HashSet<V>,
}

impl<V: Vertex> VisitedSet<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, vertex: &V) -> bool {
        if self.seen.contains(vertex) {
            return false;
        }
        self.seen.insert(vertex.clone())
    }

    #[inline]
    pub(crate) fn is_visited(&self, vertex: &V) -> bool {
        self.seen.contains(vertex)
    }

    #[inline]
    pub(crate) fn mark(&mut self, vertex: &V) {
        self.try_visit(vertex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_visit_once() {
        let mut visited = VisitedSet::with_capacity(2);
        assert!(visited.try_visit(&"a"));
        assert!(!visited.try_visit(&"a"));
        assert!(visited.is_visited(&"a"));
        assert!(!visited.is_visited(&"b"));
        visited.mark(&"b");
        assert_eq!(visited.len(), 2);
    }
}
