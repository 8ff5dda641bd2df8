//! Converter and scanner benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use smallprintf_bench::WORKLOADS;
use smallprintf_core::{StackSink, emit_decimal, emit_hex, format, try_format};

fn bench_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit_decimal");
    for &value in &[0u16, 7, 1234, u16::MAX] {
        group.bench_with_input(BenchmarkId::new("u16", value), &value, |b, &v| {
            b.iter(|| {
                let mut sink = StackSink::<8>::new();
                black_box(emit_decimal(&mut sink, black_box(v), 0))
            });
        });
    }
    group.bench_function("u64_max", |b| {
        b.iter(|| {
            let mut sink = StackSink::<24>::new();
            black_box(emit_decimal(&mut sink, black_box(u64::MAX), 0))
        });
    });
    group.finish();
}

fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit_hex");
    for digits in 1..=4usize {
        group.bench_with_input(BenchmarkId::new("u16", digits), &digits, |b, &d| {
            b.iter(|| {
                let mut sink = StackSink::<8>::new();
                black_box(emit_hex(&mut sink, black_box(0xBEEFu16), d))
            });
        });
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    for workload in WORKLOADS {
        let mut probe = StackSink::<128>::new();
        let len = format(&mut probe, workload.format, workload.args);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_function(BenchmarkId::new("lenient", workload.name), |b| {
            b.iter(|| {
                let mut sink = StackSink::<128>::new();
                black_box(format(&mut sink, black_box(workload.format), workload.args))
            });
        });
        group.bench_function(BenchmarkId::new("strict", workload.name), |b| {
            b.iter(|| {
                let mut sink = StackSink::<128>::new();
                black_box(try_format(&mut sink, black_box(workload.format), workload.args))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decimal, bench_hex, bench_format);
criterion_main!(benches);
