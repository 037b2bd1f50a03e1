use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lettered_sssp::algorithm::traits::ShortestPathAlgorithm;
use lettered_sssp::algorithm::Dijkstra;
use lettered_sssp::graph::DirectedGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

// Dense random graph over the full 26-letter alphabet
fn random_graph(edges_per_vertex: usize, seed: u64) -> DirectedGraph<u64> {
    let n = 26;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::with_capacity(n);

    for from in 0..n {
        for _ in 0..edges_per_vertex {
            let to = rng.gen_range(0..n);
            let weight = rng.gen_range(1..100);
            graph
                .add_edge(from, to, weight)
                .expect("endpoints in range");
        }
    }
    graph
}

fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dijkstra (indexed vs rebuild)");

    for edges_per_vertex in [2, 8, 25] {
        let graph = random_graph(edges_per_vertex, 7);

        group.bench_with_input(
            BenchmarkId::new("indexed", edges_per_vertex),
            &graph,
            |b, g| b.iter(|| Dijkstra::new().compute_shortest_paths(black_box(g), 0)),
        );

        group.bench_with_input(
            BenchmarkId::new("rebuild", edges_per_vertex),
            &graph,
            |b, g| b.iter(|| Dijkstra::rebuilding().compute_shortest_paths(black_box(g), 0)),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
