//! Chained-pipeline benchmarks.
//!
//! Each benchmark pairs one pipeline shape with every representation of the
//! matching domain; the representation label is the reporting key. Chains are
//! rebuilt lazily inside `b.iter` and fully drained through the discarding
//! sink, so the measured cost is traversal plus adapter overhead, never
//! accumulation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use iter_chain_bench::matrix::ReprMatrix;
use iter_chain_bench::pipeline::{
    classification_fixture, classify_filter_reduce, filter_map_x1, filter_map_x2, filter_map_x3,
    filter_map_x4, filter_map_x5, filter_then_mutating_map, multi_mutating_map, mutating_map,
    single_map, Sink,
};

fn bench_single_map(c: &mut Criterion) {
    let matrix = ReprMatrix::build().expect("matrix construction");
    let sink = Sink;

    let mut group = c.benchmark_group("single_map");
    for (repr, label) in matrix.numeric_representations() {
        group.bench_with_input(BenchmarkId::from_parameter(label), repr, |b, repr| {
            b.iter(|| sink.drain(single_map(repr)))
        });
    }
    group.finish();
}

fn bench_filter_map_chains(c: &mut Criterion) {
    let matrix = ReprMatrix::build().expect("matrix construction");
    let sink = Sink;

    let mut group = c.benchmark_group("filter_map_chain");
    for (repr, label) in matrix.numeric_representations() {
        group.bench_with_input(BenchmarkId::new("x1", label), repr, |b, repr| {
            b.iter(|| sink.drain(filter_map_x1(repr)))
        });
        group.bench_with_input(BenchmarkId::new("x2", label), repr, |b, repr| {
            b.iter(|| sink.drain(filter_map_x2(repr)))
        });
        group.bench_with_input(BenchmarkId::new("x3", label), repr, |b, repr| {
            b.iter(|| sink.drain(filter_map_x3(repr)))
        });
        group.bench_with_input(BenchmarkId::new("x4", label), repr, |b, repr| {
            b.iter(|| sink.drain(filter_map_x4(repr)))
        });
        group.bench_with_input(BenchmarkId::new("x5", label), repr, |b, repr| {
            b.iter(|| sink.drain(filter_map_x5(repr)))
        });
    }
    group.finish();
}

fn bench_mutating_chains(c: &mut Criterion) {
    let matrix = ReprMatrix::build().expect("matrix construction");
    let sink = Sink;

    let mut group = c.benchmark_group("mutating_chain");
    for (repr, label) in matrix.record_representations() {
        group.bench_with_input(BenchmarkId::new("mutating_map", label), repr, |b, repr| {
            b.iter(|| sink.drain(mutating_map(repr)))
        });
        group.bench_with_input(
            BenchmarkId::new("filter_then_mutating_map", label),
            repr,
            |b, repr| b.iter(|| sink.drain(filter_then_mutating_map(repr))),
        );
        group.bench_with_input(
            BenchmarkId::new("multi_mutating_map", label),
            repr,
            |b, repr| b.iter(|| sink.drain(multi_mutating_map(repr))),
        );
    }
    group.finish();
}

fn bench_classify_filter_reduce(c: &mut Criterion) {
    let labels = classification_fixture();

    c.bench_function("classify_filter_reduce", |b| {
        b.iter(|| classify_filter_reduce(&labels))
    });
}

criterion_group!(
    pipelines,
    bench_single_map,
    bench_filter_map_chains,
    bench_mutating_chains,
    bench_classify_filter_reduce
);
criterion_main!(pipelines);
