use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use descan::scan;

fn scan_benchmark(c: &mut Criterion) {
    let input = black_box("Candy -> 2.75");
    c.bench_function("scan string & f64", |b| {
        b.iter(|| {
            let mut product = String::new();
            let mut price = 0.0f64;
            let result = scan!(input, "{} -> {}", &mut product, &mut price);
            black_box(result);
            black_box(product);
            black_box(price);
        })
    });
}

fn scan_hex_benchmark(c: &mut Criterion) {
    let input = black_box("00ff7f");
    c.bench_function("scan hex u32", |b| {
        b.iter(|| {
            let mut color = 0u32;
            let result = scan!(input, "{:x}", &mut color);
            black_box(result);
            black_box(color);
        })
    });
}

criterion_group!(benches, scan_benchmark, scan_hex_benchmark);
criterion_main!(benches);
