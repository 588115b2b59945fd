//! Criterion micro-benchmarks for rule text parsing and serialization.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hrot_core::{parse, serialize};

const LONG_RULE: &str = "R8,C16,S0,3-9,14,20-31,47,58-80,99,120-150,200-288,B2,5-7,11,40-62,90-95,100,101,150-170,NM";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_conway", |b| {
        b.iter(|| black_box(parse(black_box("R1,C2,S2,3,B3")).unwrap()));
    });
    c.bench_function("parse_long", |b| {
        b.iter(|| black_box(parse(black_box(LONG_RULE)).unwrap()));
    });
}

fn bench_serialize(c: &mut Criterion) {
    let rule = parse(LONG_RULE).unwrap();
    c.bench_function("serialize_long", |b| {
        b.iter(|| black_box(serialize(black_box(&rule))));
    });
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
