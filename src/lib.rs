//! # `adjgraph` - Undirected Weighted Adjacency Graphs
//!
//! An in-memory undirected weighted graph stored as adjacency lists, with
//! externally steppable traversal cursors and single-source shortest paths.
//!
//! ## Guarantees
//!
//! ### Symmetry
//! Every mutating operation writes both directions of an edge together, so
//! for every vertex `u` and every `(v, w)` in the adjacency of `u`, `(u, w)`
//! is in the adjacency of `v`.
//!
//! ### Aliasing
//! Cursors (`Bfs`, `Dfs`) and vertex handles (`VertexRef`) borrow the graph
//! immutably for their whole lifetime and address vertices by identity, never
//! by position. Mutating a graph while a cursor over it is alive is rejected
//! by the borrow checker.
//!
//! ### Failure Modes
//! - Dereferencing an exhausted cursor returns [`GraphError::CursorExhausted`].
//! - Running Dijkstra from an absent source returns [`GraphError::VertexNotFound`].
//! - Negative edge weights are rejected by Dijkstra with [`GraphError::NegativeWeight`].
//!
//! ## Key Features
//!
//! - **Generic identities**: any `Clone + Eq + Hash + Ord + Debug` vertex type.
//! - **Generic weights**: any bounded, checked-add, totally ordered numeric type.
//! - **Steppable traversals**: `current` / `advance` / `is_exhausted`, plus `Iterator`.
//! - **Dijkstra**: ordered-set priority queue with explicit decrease-key.
//!
//! ## Example
//!
//! ```rust
//! use adjgraph::AdjGraph;
//!
//! let mut graph: AdjGraph<&str, u32> = AdjGraph::new();
//! graph.add_edge("A", "B", 5);
//! graph.add_edge("B", "C", 10);
//! graph.add_edge("A", "C", 5);
//!
//! let order: Vec<_> = graph.bfs(&"A").unwrap().map(|entry| *entry.vertex()).collect();
//! assert_eq!(order, vec!["A", "B", "C"]);
//!
//! let paths = graph.dijkstra(&"A").unwrap();
//! assert_eq!(paths.cost(&"C"), Some(5));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    connected_components, dijkstra, has_cycle, Adjacency, AdjGraph, Bfs, Dfs, PathEntry,
    ShortestPaths, Vertex, VertexRef, Weight,
};
