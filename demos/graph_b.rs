//! Integer-keyed walkthrough, plus a few queries composed from the cursors:
//! the heaviest edge, a fold over vertex ids and a cycle check.
//!
//! Run with `cargo run --example graph_b --features tracing`.

use adjgraph::{has_cycle, AdjGraph};
use tracing_subscriber::EnvFilter;

fn show(graph: &AdjGraph<i32, i32>) {
    println!("Size: {}", graph.size());
    graph.display();
    println!();
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("---------------------- Graph B ----------------------");
    let mut graph: AdjGraph<i32, i32> = AdjGraph::new();
    println!("Initial Size of Graph: {}\n", graph.size());

    println!("Adding Edges");
    graph.add_default_edge(0, 2);
    graph.add_default_edge(0, 4);
    graph.extend([
        (1, 5, 5),
        (1, 6, 10),
        (2, 5, 5),
        (2, 6, 5),
        (3, 5, 25),
        (5, 6, 25),
        (5, 7, 35),
    ]);
    show(&graph);

    println!("Modifying Edges");
    graph.modify_edge(1, 2, 6);
    graph.modify_edge(3, 4, 0);
    show(&graph);

    println!("Deleting Edges");
    graph.delete_edge(&3, &4);
    graph.delete_edge(&6, &2);
    show(&graph);

    let bfs: Vec<String> = graph.bfs(&1)?.map(|e| e.vertex().to_string()).collect();
    println!("Breadth First Search Traversal (starting with node 1): {}", bfs.join(", "));

    let mut dfs = graph.dfs(&5)?;
    print!("Depth First Search Traversal (starting with node 5): ");
    while let Ok(entry) = dfs.current() {
        print!("{}, ", entry.vertex());
        dfs.advance();
    }
    println!();

    println!("\nVertices\tShortest Path Cost (from 5)\tShortestPath");
    let paths = graph.dijkstra(&5)?;
    for (vertex, entry) in &paths {
        let route = paths
            .path_to(vertex)
            .map(|hops| hops.iter().map(|v| format!("->{v}")).collect::<String>())
            .unwrap_or_else(|| "unreachable".to_string());
        println!("{vertex}\t\t{}\t\t\t{route}", entry.cost);
    }

    let heaviest = graph
        .bfs(&0)?
        .filter_map(|entry| {
            let (to, weight) = entry.adjacency().heaviest()?;
            Some((weight, *entry.vertex(), *to))
        })
        .max_by_key(|&(weight, _, _)| weight);
    if let Some((weight, from, to)) = heaviest {
        println!("MAX EDGE is between {from} and {to} with weight {weight}");
    }

    let sum: i32 = graph.bfs(&0)?.map(|entry| *entry.vertex()).sum();
    println!("ACCUMULATE SUM OF NODES : {sum}");

    println!("CYCLE PRESENT : {}", has_cycle(&graph));
    Ok(())
}
