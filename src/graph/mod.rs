//! Undirected weighted graph storage and the algorithms that run over it.
//!
//! Organized the same way bottom-up:
//! - `bounds`: the `Vertex` and `Weight` trait bounds
//! - `adjacency`: per-vertex neighbor sets
//! - `adj_graph`: the graph container and its vertex handles
//! - `traversal`: breadth-first and depth-first cursors
//! - `shortest_path`: Dijkstra
//! - `components`: connectivity queries built on the cursors

pub mod adj_graph;
pub mod adjacency;
pub mod bounds;
pub mod components;
pub mod shortest_path;
pub mod traversal;
pub(crate) mod access;

pub use adj_graph::{AdjGraph, VertexRef};
pub use adjacency::Adjacency;
pub use bounds::{Vertex, Weight};
pub use components::{connected_components, has_cycle};
pub use shortest_path::{dijkstra, PathEntry, ShortestPaths};
pub use traversal::{Bfs, Dfs};
