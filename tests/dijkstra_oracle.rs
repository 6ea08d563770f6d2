use std::collections::HashMap;

use adjgraph::{AdjGraph, PathEntry};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

/// Cheapest simple path from `from` to every vertex, by exhaustive search.
fn brute_force(graph: &AdjGraph<u8, u32>, from: u8) -> HashMap<u8, u32> {
    fn walk(
        graph: &AdjGraph<u8, u32>,
        at: u8,
        cost: u32,
        on_path: &mut Vec<u8>,
        best: &mut HashMap<u8, u32>,
    ) {
        let entry = best.entry(at).or_insert(cost);
        *entry = (*entry).min(cost);

        for (&next, &weight) in graph.find(&at).unwrap().neighbors() {
            if !on_path.contains(&next) {
                on_path.push(next);
                walk(graph, next, cost + weight, on_path, best);
                on_path.pop();
            }
        }
    }

    let mut best = HashMap::new();
    walk(graph, from, 0, &mut vec![from], &mut best);
    best
}

fn to_petgraph(graph: &AdjGraph<u8, u32>) -> (UnGraph<u8, u32>, HashMap<u8, NodeIndex>) {
    let mut pg = UnGraph::new_undirected();
    let index: HashMap<u8, NodeIndex> = graph.vertices().map(|&v| (v, pg.add_node(v))).collect();
    for entry in graph {
        for (&neighbor, &weight) in entry.neighbors() {
            if *entry.vertex() <= neighbor {
                pg.add_edge(index[entry.vertex()], index[&neighbor], weight);
            }
        }
    }
    (pg, index)
}

fn small_graph() -> impl Strategy<Value = Vec<(u8, u8, u32)>> {
    proptest::collection::vec((0u8..6, 0u8..6, 0u32..20), 1..12)
}

fn large_graph() -> impl Strategy<Value = Vec<(u8, u8, u32)>> {
    proptest::collection::vec((0u8..40, 0u8..40, 0u32..1000), 1..150)
}

proptest! {
    #[test]
    fn test_costs_match_exhaustive_search(edges in small_graph()) {
        let source = edges[0].0;
        let graph: AdjGraph<u8, u32> = edges.into_iter().collect();

        let paths = graph.dijkstra(&source).unwrap();
        let expected = brute_force(&graph, source);

        for v in graph.vertices() {
            prop_assert_eq!(paths.cost(v), expected.get(v).copied(), "vertex {}", v);
        }
    }

    #[test]
    fn test_costs_match_petgraph(edges in large_graph()) {
        let source = edges[0].0;
        let graph: AdjGraph<u8, u32> = edges.into_iter().collect();
        let (pg, index) = to_petgraph(&graph);

        let paths = graph.dijkstra(&source).unwrap();
        let expected = petgraph::algo::dijkstra(&pg, index[&source], None, |e| *e.weight());

        for (v, idx) in &index {
            prop_assert_eq!(paths.cost(v), expected.get(idx).copied(), "vertex {}", v);
        }
    }

    #[test]
    fn test_predecessor_chains_are_consistent(edges in large_graph()) {
        let source = edges[0].0;
        let graph: AdjGraph<u8, u32> = edges.into_iter().collect();
        let paths = graph.dijkstra(&source).unwrap();

        for (v, entry) in &paths {
            let Some(path) = paths.path_to(v) else {
                prop_assert!(!entry.is_reachable());
                continue;
            };
            prop_assert_eq!(path.first(), Some(&source));
            prop_assert_eq!(path.last(), Some(v));

            let total: u32 = path
                .windows(2)
                .map(|hop| graph.edge_weight(&hop[0], &hop[1]).unwrap())
                .sum();
            prop_assert_eq!(Some(total), paths.cost(v));
        }
    }
}

#[test]
fn test_every_vertex_reported() {
    let graph: AdjGraph<u8, u32> = [(0, 2, 1), (5, 6, 1)].into_iter().collect();
    let paths = graph.dijkstra(&0).unwrap();

    assert_eq!(paths.len(), graph.size());
    assert_eq!(
        paths.get(&6),
        Some(&PathEntry {
            predecessor: None,
            cost: u32::MAX,
        })
    );
    assert_eq!(paths.source(), &0);
}
