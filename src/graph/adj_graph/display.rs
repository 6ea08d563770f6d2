use core::fmt;

use crate::graph::bounds::{Vertex, Weight};

use super::AdjGraph;

/// One line per vertex, `<vertex> : <neighbor>,<weight>, ...`.
///
/// Vertices are written in ascending order so the dump is stable across runs.
/// The format is diagnostic only.
impl<V, E> fmt::Display for AdjGraph<V, E>
where
    V: Vertex + fmt::Display,
    E: Weight + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.network.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        for (vertex, adjacency) in entries {
            write!(f, "{vertex} : ")?;
            for (neighbor, weight) in adjacency {
                write!(f, "{neighbor},{weight}, ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V, E> AdjGraph<V, E>
where
    V: Vertex + fmt::Display,
    E: Weight + fmt::Display,
{
    /// Prints every vertex and its neighbors to standard output.
    pub fn display(&self) {
        print!("{self}");
    }
}
