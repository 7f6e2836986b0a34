use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Instant;
use undirected_sssp::{Graph, ShortestPathEngine};

const SAMPLE_EDGES: [(&str, &str, f64); 9] = [
    ("a", "b", 7.0),
    ("a", "c", 9.0),
    ("a", "f", 14.0),
    ("b", "c", 10.0),
    ("b", "d", 15.0),
    ("c", "d", 11.0),
    ("c", "f", 2.0),
    ("d", "e", 6.0),
    ("e", "f", 9.0),
];

#[derive(Serialize, Deserialize, Debug)]
pub struct PathReport {
    pub graph: GraphInfo,
    pub source: String,
    pub destination: String,
    pub distance: f64,
    pub path: Vec<String>,
    pub settled: Vec<String>,
    pub elapsed_seconds: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GraphInfo {
    pub origin: String,
    pub nodes: usize,
    pub edges: usize,
}

fn print_help(program_name: &str) {
    println!("Shortest Path");
    println!("Runs Dijkstra's algorithm on a weighted, undirected edge list");
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <edge file> <source> <destination>", program_name);
    println!("    {} [OPTIONS] --sample <source> <destination>", program_name);
    println!("    {} --help", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <edge file>       Text file with one `from to weight` record per line");
    println!("    <source>          Key of the start node");
    println!("    <destination>     Key of the end node");
    println!();
    println!("OPTIONS:");
    println!("    --sample          Use the built-in six node sample graph (a..f)");
    println!("    --json            Output results in JSON format");
    println!();
    println!("EXAMPLES:");
    println!("    {} --sample a d", program_name);
    println!("    {} --json tests/test_data/reference.edges a e", program_name);
    println!();
    println!("Set RUST_LOG=trace to see every visit and relaxation.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h") {
        print_help(&args[0]);
        std::process::exit(0);
    }

    let mut json_output = false;
    let mut use_sample = false;
    let mut positional: Vec<&str> = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json_output = true,
            "--sample" => use_sample = true,
            _ => positional.push(arg),
        }
    }

    let expected = if use_sample { 2 } else { 3 };
    if positional.len() != expected {
        eprintln!("Error: Expected {} arguments, got {}", expected, positional.len());
        eprintln!();
        eprintln!(
            "Usage: {} [OPTIONS] (--sample | <edge file>) <source> <destination>",
            args[0]
        );
        eprintln!("Try '{} --help' for more information.", args[0]);
        std::process::exit(1);
    }

    let (graph, origin) = if use_sample {
        let graph = Graph::from_edges(
            SAMPLE_EDGES
                .iter()
                .map(|&(from, to, weight)| (from.to_string(), to.to_string(), weight)),
        );
        (graph, "sample".to_string())
    } else {
        let path = Path::new(positional[0]);
        info!("Loading edge list from {}", path.display());
        (Graph::<String>::from_file(path)?, path.display().to_string())
    };

    let source = positional[expected - 2].to_string();
    let destination = positional[expected - 1].to_string();

    if !json_output {
        println!("Graph data:");
        print!("{}", graph);
        println!();
    }

    let start = Instant::now();
    let engine = ShortestPathEngine::new(&graph);
    let paths = engine.run(&source)?;
    let path = paths.path_to(&destination)?;
    let distance = paths.distance(&destination)?;
    let elapsed = start.elapsed();

    info!(
        "Settled {} of {} nodes in {:.3}ms",
        paths.reachable_count(),
        graph.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    if json_output {
        let report = PathReport {
            graph: GraphInfo {
                origin,
                nodes: graph.len(),
                edges: graph.edge_count(),
            },
            source,
            destination,
            distance,
            path: path.into_iter().cloned().collect(),
            settled: paths.settled_order().cloned().collect(),
            elapsed_seconds: elapsed.as_secs_f64(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        println!("{}", json);
    } else {
        println!("Final state: {}", paths);
        println!("The shortest path: {:?}", path);
        println!("Total weight: {}", distance);
    }

    Ok(())
}
