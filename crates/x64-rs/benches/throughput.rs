//! Performance benchmarks for `x64_rs`.
//!
//! Measures:
//! - Operand-set algebra latency (the form-selection hot path)
//! - Label interning throughput (label-heavy workloads)
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use x64_rs::{LabelRegistry, OpSet};

// ─── Operand-Set Algebra ─────────────────────────────────────────────────────

fn bench_opset_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("opset_algebra");

    group.bench_function("union_intersect_chain", |b| {
        b.iter(|| {
            let template = black_box(OpSet::GP) | black_box(OpSet::EFLAG);
            black_box(template & !black_box(OpSet::VEC))
        })
    });

    group.bench_function("subset_test", |b| {
        let template = OpSet::GP | OpSet::AL | OpSet::CL;
        b.iter(|| black_box(template).contains(black_box(OpSet::GP64)))
    });

    group.bench_function("equality", |b| {
        let a = OpSet::GP | OpSet::XMM;
        let bset = OpSet::GP | OpSet::YMM;
        b.iter(|| black_box(a) == black_box(bset))
    });

    group.finish();
}

// ─── Label Interning ─────────────────────────────────────────────────────────

fn bench_label_interning(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_interning");
    let names: Vec<String> = (0..1000).map(|i| format!("block_{i}")).collect();
    group.throughput(Throughput::Elements(names.len() as u64));

    group.bench_function("intern_1000_distinct", |b| {
        b.iter(|| {
            let mut reg = LabelRegistry::new();
            for name in &names {
                black_box(reg.named(name));
            }
        })
    });

    group.bench_function("reintern_1000_hits", |b| {
        let mut reg = LabelRegistry::new();
        for name in &names {
            reg.named(name);
        }
        b.iter(|| {
            for name in &names {
                black_box(reg.named(name));
            }
        })
    });

    group.bench_function("fresh_1000", |b| {
        b.iter(|| {
            let mut reg = LabelRegistry::new();
            for _ in 0..1000 {
                black_box(reg.fresh());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_opset_algebra, bench_label_interning);
criterion_main!(benches);
