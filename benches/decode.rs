//! Benchmarks for part-number decoding.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use extrude::decode;

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_plain", |b| {
        b.iter(|| decode(black_box("HFSB5-2020-500")));
    });

    c.bench_function("decode_with_alterations", |b| {
        b.iter(|| decode(black_box("HFSB5-2020-500-LCP-RCP-AV360-Z6-XA200")));
    });

    c.bench_function("decode_batch", |b| {
        let parts: Vec<String> = (0..1000)
            .map(|i| format!("HFSB5-2020-{}-LCP-RCP-AV{}", 250 + i, 100 + i))
            .collect();
        b.iter(|| {
            for part in &parts {
                let _ = decode(black_box(part));
            }
        });
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
