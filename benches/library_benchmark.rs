use std::fmt::Write;

use passgan::{breach, generator, strength};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A range response roughly the size of a real one, with the wanted suffix last.
fn range_body(suffix: &str) -> String {
    let mut body = String::new();
    for i in 0..800u32 {
        writeln!(body, "{:035X}:{}\r", i, i % 17).unwrap();
    }
    writeln!(body, "{}:42\r", suffix).unwrap();
    body
}

fn criterion_benchmark_generate(c: &mut Criterion) {
    let config = generator::GeneratorConfig {
        length: generator::MAX_LENGTH,
        ..generator::GeneratorConfig::default()
    };

    c.bench_function("generate 64 characters", |b| {
        b.iter(|| generator::generate(black_box(&config)).unwrap())
    });
}

fn criterion_benchmark_score(c: &mut Criterion) {
    c.bench_function("score 16 characters", |b| {
        b.iter(|| strength::score(black_box("Aa1!Aa1!Aa1!Aa1!")))
    });
}

fn criterion_benchmark_find_count(c: &mut Criterion) {
    let range = breach::HashRange::new("password");
    let body = range_body(&range.suffix);

    c.bench_function("scan 800 range records", |b| {
        b.iter(|| breach::find_count(black_box(&body), &range.suffix).unwrap())
    });
}

criterion_group!(
    benches,
    criterion_benchmark_generate,
    criterion_benchmark_score,
    criterion_benchmark_find_count
);
criterion_main!(benches);
