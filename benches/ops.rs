use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordered_collect::Collection;

fn digits(n: i64) -> Collection<i64> {
    Collection::from_values(0..n)
}

fn bench_map(c: &mut Criterion) {
    let collection = digits(10_000);
    c.bench_function("map_10k", |b| {
        b.iter(|| black_box(collection.map(|v| v * 2)))
    });
}

fn bench_filter(c: &mut Criterion) {
    let collection = digits(10_000);
    c.bench_function("filter_10k", |b| {
        b.iter(|| black_box(collection.filter(|v, _| v % 2 == 0)))
    });
}

fn bench_group_by(c: &mut Criterion) {
    let collection = digits(10_000);
    c.bench_function("group_by_10k_100_groups", |b| {
        b.iter(|| black_box(collection.group_by(|v, _| (v % 100) as usize)))
    });
}

fn bench_chunk(c: &mut Criterion) {
    let collection = digits(10_000);
    c.bench_function("chunk_10k_by_64", |b| {
        b.iter(|| black_box(collection.chunk(64).unwrap()))
    });
}

fn bench_sort(c: &mut Criterion) {
    let collection = digits(10_000).sort_desc();
    c.bench_function("sort_10k", |b| b.iter(|| black_box(collection.sort())));
}

criterion_group!(
    benches,
    bench_map,
    bench_filter,
    bench_group_by,
    bench_chunk,
    bench_sort
);
criterion_main!(benches);
