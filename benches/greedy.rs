use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphcolor::graph::{EdgeDeclaration, InterferenceGraph};
use graphcolor::GreedyColourer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(nodes: u64, density: f64) -> InterferenceGraph {
    let mut rng = StdRng::seed_from_u64(42);
    let decls: Vec<EdgeDeclaration> = (1..=nodes)
        .filter_map(|n| {
            let neighbours: Vec<u64> = (n + 1..=nodes)
                .filter(|_| rng.gen_bool(density))
                .collect();
            EdgeDeclaration::from_raw(n, &neighbours)
        })
        .collect();
    InterferenceGraph::from_declarations(decls).expect("generated graph is valid")
}

pub fn benchmark_greedy_colouring(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_colouring");
    for nodes in [100u64, 1_000, 5_000] {
        let graph = random_graph(nodes, 10.0 / nodes as f64);
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &graph, |b, graph| {
            b.iter(|| black_box(GreedyColourer::new(graph).colour()))
        });
    }
    group.finish();
}

pub fn benchmark_graph_build(c: &mut Criterion) {
    c.bench_function("build_dense_200", |b| {
        b.iter(|| black_box(random_graph(200, 0.5)))
    });
}

criterion_group!(benches, benchmark_greedy_colouring, benchmark_graph_build);
criterion_main!(benches);
