//! String-keyed walkthrough: edge edits, traversals and a shortest-path table.
//!
//! Run with `cargo run --example graph_a --features tracing`, optionally with
//! `RUST_LOG=adjgraph=debug` to watch every edge edit.

use adjgraph::AdjGraph;
use tracing_subscriber::EnvFilter;

fn show(graph: &AdjGraph<String, i32>) {
    println!("Size: {}", graph.size());
    graph.display();
    println!();
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("---------------------- GRAPH A ----------------------");
    let mut graph: AdjGraph<String, i32> = AdjGraph::new();
    println!("Initial Size of Graph: {}\n", graph.size());

    println!("Adding Edges");
    for (u, v, w) in [
        ("A", "B", 5),
        ("B", "C", 10),
        ("C", "D", 3),
        ("D", "A", 5),
        ("A", "B", 100),
        ("B", "C", 150),
        ("A", "C", 5),
    ] {
        graph.add_edge(u.into(), v.into(), w);
    }
    show(&graph);

    println!("Modifying Edges");
    graph.modify_edge("A".into(), "B".into(), 6);
    graph.modify_edge("B".into(), "C".into(), 150);
    show(&graph);

    println!("Deleting Edges");
    graph.delete_edge(&"B".into(), &"C".into());
    show(&graph);

    let start = String::from("A");
    let mut bfs = graph.bfs(&start)?;
    print!("Breadth First Search Traversal (starting with node A): ");
    while !bfs.is_exhausted() {
        print!("{}, ", bfs.current()?.vertex());
        bfs.advance();
    }
    println!();

    let dfs = graph.dfs(&"C".into())?;
    let walk: Vec<&str> = dfs.map(|entry| entry.vertex().as_str()).collect();
    println!("Depth First Search Traversal (starting with node C): {}", walk.join(", "));

    println!("\nVertices\tShortest Path Cost (from A)\tShortestPath");
    let paths = graph.dijkstra(&start)?;
    for (vertex, entry) in &paths {
        let route = paths
            .path_to(vertex)
            .map(|hops| hops.iter().map(|v| format!("->{v}")).collect::<String>())
            .unwrap_or_else(|| "unreachable".to_string());
        println!("{vertex}\t\t{}\t\t\t{route}", entry.cost);
    }

    println!("\n{}", serde_json::to_string_pretty(&paths)?);
    Ok(())
}
