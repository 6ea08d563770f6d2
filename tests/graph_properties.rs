use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use adjgraph::AdjGraph;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Add(u8, u8, u32),
    Delete(u8, u8),
    Modify(u8, u8, u32),
}

fn edges() -> impl Strategy<Value = Vec<(u8, u8, u32)>> {
    proptest::collection::vec((0u8..12, 0u8..12, 0u32..50), 0..40)
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            (0u8..10, 0u8..10, 0u32..50).prop_map(|(u, v, w)| Operation::Add(u, v, w)),
            (0u8..10, 0u8..10).prop_map(|(u, v)| Operation::Delete(u, v)),
            (0u8..10, 0u8..10, 0u32..50).prop_map(|(u, v, w)| Operation::Modify(u, v, w)),
        ],
        1..80,
    )
}

/// Hop distances from `start`, computed from plain neighbor lists.
fn hop_distances(graph: &AdjGraph<u8, u32>, start: u8) -> HashMap<u8, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        let next = dist[&u] + 1;
        for (&v, _) in graph.find(&u).unwrap().neighbors() {
            if !dist.contains_key(&v) {
                dist.insert(v, next);
                queue.push_back(v);
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn test_symmetry_survives_any_operation_sequence(ops in operations()) {
        let mut graph: AdjGraph<u8, u32> = AdjGraph::new();
        let mut model: BTreeMap<(u8, u8), u32> = BTreeMap::new();
        let key = |u: u8, v: u8| (u.min(v), u.max(v));

        for op in ops {
            match op {
                Operation::Add(u, v, w) => {
                    let fresh = !model.contains_key(&key(u, v));
                    model.entry(key(u, v)).or_insert(w);
                    prop_assert_eq!(graph.add_edge(u, v, w), fresh);
                }
                Operation::Delete(u, v) => {
                    let removed = model.remove(&key(u, v));
                    prop_assert_eq!(graph.delete_edge(&u, &v), removed);
                }
                Operation::Modify(u, v, w) => {
                    model.insert(key(u, v), w);
                    graph.modify_edge(u, v, w);
                }
            }
        }

        for entry in &graph {
            for (neighbor, weight) in entry.neighbors() {
                prop_assert_eq!(graph.edge_weight(neighbor, entry.vertex()), Some(*weight));
                prop_assert_eq!(model.get(&key(*entry.vertex(), *neighbor)), Some(weight));
            }
        }
        prop_assert_eq!(graph.edge_count(), model.len());
    }

    #[test]
    fn test_added_edge_is_visible_from_both_ends(
        base in edges(), u in 0u8..20, v in 0u8..20, w in 0u32..50
    ) {
        let mut graph: AdjGraph<u8, u32> = base.into_iter().collect();
        graph.add_edge(u, v, w);

        let from_u = graph.find(&u).unwrap();
        let from_v = graph.find(&v).unwrap();
        prop_assert!(from_u.adjacency().contains(&v));
        prop_assert!(from_v.adjacency().contains(&u));

        graph.delete_edge(&v, &u);
        prop_assert!(!graph.contains_edge(&u, &v));
        prop_assert!(!graph.contains_edge(&v, &u));
    }

    #[test]
    fn test_modify_after_add_leaves_one_pair(
        base in edges(), u in 0u8..12, v in 0u8..12, w1 in 0u32..50, w2 in 0u32..50
    ) {
        let mut graph: AdjGraph<u8, u32> = base.into_iter().collect();
        graph.add_edge(u, v, w1);
        let degree = graph.degree(&u);

        graph.modify_edge(u, v, w2);
        prop_assert_eq!(graph.edge_weight(&u, &v), Some(w2));
        prop_assert_eq!(graph.edge_weight(&v, &u), Some(w2));
        prop_assert_eq!(graph.degree(&u), degree);
    }

    #[test]
    fn test_bfs_covers_component_in_layer_order(base in edges(), start in 0u8..12) {
        let mut graph: AdjGraph<u8, u32> = base.into_iter().collect();
        graph.add_edge(start, start.wrapping_add(1), 1);

        let order: Vec<u8> = graph.bfs(&start).unwrap().map(|e| *e.vertex()).collect();
        let dist = hop_distances(&graph, start);

        let unique: BTreeSet<u8> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        prop_assert_eq!(unique, dist.keys().copied().collect::<BTreeSet<_>>());
        prop_assert_eq!(order[0], start);
        for pair in order.windows(2) {
            prop_assert!(dist[&pair[0]] <= dist[&pair[1]]);
        }
    }

    #[test]
    fn test_dfs_covers_component_once(base in edges(), start in 0u8..12) {
        let mut graph: AdjGraph<u8, u32> = base.into_iter().collect();
        graph.add_edge(start, start.wrapping_add(1), 1);

        let mut dfs = graph.dfs(&start).unwrap();
        let mut order = Vec::new();
        while !dfs.is_exhausted() {
            order.push(*dfs.current().unwrap().vertex());
            dfs.advance();
        }
        prop_assert!(dfs.current().is_err());

        let unique: BTreeSet<u8> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        prop_assert_eq!(
            unique,
            hop_distances(&graph, start).keys().copied().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn test_components_partition_vertices(base in edges()) {
        let graph: AdjGraph<u8, u32> = base.into_iter().collect();
        let components = adjgraph::connected_components(&graph);

        let total: usize = components.iter().map(Vec::len).sum();
        prop_assert_eq!(total, graph.size());
        for component in &components {
            let reached: BTreeSet<u8> = hop_distances(&graph, component[0]).into_keys().collect();
            prop_assert_eq!(reached, component.iter().copied().collect::<BTreeSet<_>>());
        }
    }
}
