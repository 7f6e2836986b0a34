use undirected_sssp::{Graph, ShortestPathEngine};

fn main() {
    let mut graph = Graph::new();

    graph.add_edge("a", "b", 12.0);
    graph.add_edge("a", "f", 16.0);
    graph.add_edge("a", "g", 14.0);
    graph.add_edge("b", "c", 10.0);
    graph.add_edge("b", "f", 7.0);
    graph.add_edge("g", "f", 9.0);
    graph.add_edge("g", "e", 8.0);
    graph.add_edge("f", "c", 6.0);
    graph.add_edge("f", "e", 2.0);
    graph.add_edge("c", "e", 5.0);
    graph.add_edge("c", "d", 3.0);
    graph.add_edge("e", "d", 4.0);

    let engine = ShortestPathEngine::new(&graph);
    let paths = match engine.run(&"a") {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    println!("Shortest distances from a:");
    let mut sorted_distances: Vec<_> = paths.distances().collect();
    sorted_distances.sort_by_key(|&(key, _)| *key);

    for (key, dist) in sorted_distances {
        if dist == f64::INFINITY {
            println!("  {} -> ∞", key);
        } else {
            println!("  {} -> {:.1}", key, dist);
        }
    }

    match paths.path_to(&"d") {
        Ok(path) => println!("Path to d: {:?}", path),
        Err(err) => println!("No path to d: {err}"),
    }
}
