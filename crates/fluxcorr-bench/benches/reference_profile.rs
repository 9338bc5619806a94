//! Criterion benchmarks for whole simulation runs.

use std::hint::black_box;
use std::io;

use criterion::{criterion_group, criterion_main, Criterion};
use fluxcorr_bench::{reference_profile, stress_profile};
use fluxcorr_engine::Simulation;
use fluxcorr_log::CsvSnapshotWriter;
use fluxcorr_test_utils::MemorySink;

fn bench_step_1k(c: &mut Criterion) {
    let mut sim = Simulation::new(reference_profile()).unwrap();
    sim.step().unwrap();

    c.bench_function("step_1k", |b| {
        b.iter(|| {
            let report = sim.step().unwrap();
            black_box(report);
        });
    });
}

fn bench_step_100k(c: &mut Criterion) {
    let mut sim = Simulation::new(stress_profile()).unwrap();
    sim.step().unwrap();

    c.bench_function("step_100k", |b| {
        b.iter(|| {
            let report = sim.step().unwrap();
            black_box(report);
        });
    });
}

fn bench_reference_run_to_csv(c: &mut Criterion) {
    c.bench_function("reference_run_csv", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(reference_profile()).unwrap();
            let mut writer = CsvSnapshotWriter::new(io::sink());
            let summary = sim.run(&mut writer).unwrap();
            black_box(summary);
        });
    });
}

fn bench_reference_run_to_memory(c: &mut Criterion) {
    c.bench_function("reference_run_memory", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(reference_profile()).unwrap();
            let mut sink = MemorySink::new();
            sim.run(&mut sink).unwrap();
            black_box(sink.snapshots().len());
        });
    });
}

criterion_group!(
    benches,
    bench_step_1k,
    bench_step_100k,
    bench_reference_run_to_csv,
    bench_reference_run_to_memory
);
criterion_main!(benches);
