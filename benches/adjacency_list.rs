use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphs::AdjacencyList;

fn ring(n: usize) -> AdjacencyList {
    let mut list: AdjacencyList = (0..n).collect();
    for v in 0..n {
        list.add_unweighted_edge(v, (v + 1) % n);
    }
    list
}

fn bench_add_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_edges");
    for n in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(ring(n)))
        });
    }
    group.finish();
}

fn bench_remove_vertex(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_vertex");
    for n in [100usize, 1_000] {
        let list = ring(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut list = list.clone();
                list.remove_vertex(black_box(&(n / 2)));
                list
            })
        });
    }
    group.finish();
}

fn bench_degree_stats(c: &mut Criterion) {
    let list = ring(10_000);
    c.bench_function("degree_stats", |b| b.iter(|| black_box(list.degree_stats())));
}

criterion_group!(
    benches,
    bench_add_edges,
    bench_remove_vertex,
    bench_degree_stats
);
criterion_main!(benches);
