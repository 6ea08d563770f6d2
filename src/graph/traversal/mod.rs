//! Externally steppable graph traversals.
//!
//! Both cursors expose the same surface:
//! - `current()` peeks at the vertex the cursor is positioned on,
//! - `advance()` moves to the next vertex in traversal order,
//! - `is_exhausted()` reports the terminal state,
//!
//! and both implement `Iterator`, yielding each reachable vertex exactly once.
//! A cursor borrows its graph for its whole lifetime and tracks vertices by
//! identity, so the graph cannot change underneath it.

mod bfs;
mod dfs;

pub use bfs::Bfs;
pub use dfs::Dfs;
