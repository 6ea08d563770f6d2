//! Error type shared by the graph, cursors and shortest-path engine.

use std::fmt::Debug;

/// Errors reported by graph queries.
///
/// Vertex identities are captured through their `Debug` rendering so the
/// error type stays independent of the graph's type parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The requested vertex is not part of the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// A cursor was dereferenced after its traversal finished.
    #[error("cursor exhausted")]
    CursorExhausted,

    /// Dijkstra found an edge whose weight is below zero.
    #[error("negative edge weight between {from} and {to}")]
    NegativeWeight {
        /// One endpoint of the offending edge.
        from: String,
        /// The other endpoint of the offending edge.
        to: String,
    },
}

impl GraphError {
    pub(crate) fn vertex_not_found<V: Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }

    pub(crate) fn negative_weight<V: Debug>(from: &V, to: &V) -> Self {
        Self::NegativeWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GraphError::vertex_not_found(&"Z").to_string(),
            "vertex not found: \"Z\""
        );
        assert_eq!(GraphError::CursorExhausted.to_string(), "cursor exhausted");
        assert_eq!(
            GraphError::negative_weight(&1, &2).to_string(),
            "negative edge weight between 1 and 2"
        );
    }
}
