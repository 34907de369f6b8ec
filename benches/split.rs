//! Benchmarks for listing splitting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codesplit::path::{base_name_of, directory_of};
use codesplit::splitter::{split, split_sections};

/// Build a listing of `count` files spread over a few directories.
fn listing(count: usize) -> String {
    let mut text = String::from("Generated listing\n\n");
    for i in 0..count {
        text.push_str(&format!("// src/module_{}/file_{}.rs\n", i % 8, i));
        for line in 0..20 {
            text.push_str(&format!("pub fn item_{}_{}() -> usize {{ {} }}\n", i, line, line));
        }
        text.push('\n');
    }
    text
}

// -- Splitting benchmarks --

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    let small = listing(3);
    let large = listing(500);

    group.bench_function("split_small", |b| b.iter(|| split(black_box(Some(small.as_str())))));

    group.bench_function("split_large", |b| b.iter(|| split(black_box(Some(large.as_str())))));

    group.bench_function("split_sections_large", |b| {
        b.iter(|| split_sections(black_box(Some(large.as_str()))))
    });

    group.finish();
}

// -- Path benchmarks --

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("paths");

    let path = "src/cli/commands/nested/deeper/file.rs";

    group.bench_function("directory_of", |b| b.iter(|| directory_of(black_box(path))));
    group.bench_function("base_name_of", |b| b.iter(|| base_name_of(black_box(path))));

    group.finish();
}

criterion_group!(benches, bench_split, bench_paths);
criterion_main!(benches);
