use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use undirected_sssp::{Graph, ShortestPathEngine};

#[path = "../tests/graph_loader.rs"]
mod graph_loader;

fn create_sparse_graph(n: usize, density: f64, seed: u64) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(n);

    let m = ((n as f64) * density).round() as usize;

    // Spanning tree first so every node is reachable
    for i in 1..n {
        let parent = rng.random_range(0..i);
        let weight = rng.random_range(1.0..10.0);
        graph.add_edge(parent, i, weight);
    }

    let remaining_edges = m.saturating_sub(n - 1);
    for _ in 0..remaining_edges {
        let from = rng.random_range(0..n);
        let to = rng.random_range(0..n);
        if from != to {
            let weight = rng.random_range(1.0..10.0);
            graph.add_edge(from, to, weight);
        }
    }

    graph
}

fn create_dense_graph(n: usize, seed: u64) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(n);

    // ~n^1.5 edges
    let num_edges = ((n as f64).powf(1.5)) as usize;

    for i in 0..n {
        graph.add_node(i);
    }
    for _ in 0..num_edges {
        let from = rng.random_range(0..n);
        let to = rng.random_range(0..n);
        if from != to {
            let weight = rng.random_range(0.1..20.0);
            graph.add_edge(from, to, weight);
        }
    }

    graph
}

fn bench_engine_vs_petgraph(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dijkstra");

    for &n in &[100, 1_000, 10_000] {
        let sparse_graph = create_sparse_graph(n, 3.0, 42);
        let (pg_graph, node_map) = graph_loader::to_petgraph(&sparse_graph);
        let pg_source = node_map[&0];

        group.bench_with_input(BenchmarkId::new("Engine_Sparse", n), &n, |b, _| {
            let engine = ShortestPathEngine::new(&sparse_graph);
            b.iter(|| black_box(engine.run(&0).map(|paths| paths.reachable_count())))
        });

        group.bench_with_input(BenchmarkId::new("Petgraph_Sparse", n), &n, |b, _| {
            b.iter(|| {
                black_box(petgraph::algo::dijkstra(
                    &pg_graph,
                    pg_source,
                    None,
                    |e| *e.weight(),
                ))
            })
        });
    }

    for &n in &[100, 500, 1_000] {
        let dense_graph = create_dense_graph(n, 42);

        group.bench_with_input(BenchmarkId::new("Engine_Dense", n), &n, |b, _| {
            let engine = ShortestPathEngine::new(&dense_graph);
            b.iter(|| black_box(engine.run(&0).map(|paths| paths.reachable_count())))
        });
    }

    group.finish();
}

fn bench_path_reconstruction(c: &mut Criterion) {
    let graph = create_sparse_graph(10_000, 2.0, 123);
    let engine = ShortestPathEngine::new(&graph);

    c.bench_function("path_to_farthest", |b| {
        let Ok(paths) = engine.run(&0) else {
            return;
        };
        let farthest = paths
            .distances()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(&node, _)| node)
            .unwrap_or(0);
        b.iter(|| black_box(paths.path_to(&farthest).map(|path| path.len())))
    });
}

criterion_group!(benches, bench_engine_vs_petgraph, bench_path_reconstruction);
criterion_main!(benches);
