//! Connectivity queries built on the traversal cursors.

use crate::graph::access::visited::VisitedSet;
use crate::graph::adj_graph::AdjGraph;
use crate::graph::bounds::{Vertex, Weight};
use crate::graph::traversal::Bfs;

/// Computes the connected components of the graph.
///
/// Each component is sorted ascending and components are ordered by their
/// smallest vertex.
pub fn connected_components<V: Vertex, E: Weight>(graph: &AdjGraph<V, E>) -> Vec<Vec<V>> {
    let mut starts: Vec<&V> = graph.vertices().collect();
    starts.sort_unstable();

    let mut seen = VisitedSet::with_capacity(graph.size());
    let mut components = Vec::new();

    for start in starts {
        if seen.is_visited(start) {
            continue;
        }
        let Some(entry) = graph.find(start) else {
            continue;
        };

        let mut component: Vec<V> = Bfs::new(entry)
            .map(|member| member.vertex().clone())
            .collect();
        for member in &component {
            seen.mark(member);
        }
        component.sort_unstable();
        components.push(component);
    }

    components
}

/// Returns `true` if the graph contains a cycle.
///
/// A component of an undirected graph is acyclic exactly when it is a tree,
/// i.e. has one edge fewer than it has vertices. Self-loops count as cycles.
pub fn has_cycle<V: Vertex, E: Weight>(graph: &AdjGraph<V, E>) -> bool {
    connected_components(graph).iter().any(|component| {
        let (entries, loops) = component
            .iter()
            .filter_map(|vertex| graph.find(vertex))
            .fold((0usize, 0usize), |(entries, loops), entry| {
                (
                    entries + entry.degree(),
                    loops + usize::from(entry.adjacency().contains(entry.vertex())),
                )
            });
        (entries + loops) / 2 >= component.len()
    })
}
