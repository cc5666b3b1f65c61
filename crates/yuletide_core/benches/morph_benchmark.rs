//! # Morph Tick Benchmark
//!
//! The morph tick runs every frame for every particle.
//!
//! Target: a 3000-particle tick far below one 60Hz frame, no allocation.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yuletide_core::{MorphConfig, MorphEngine, ViewModeController};
use yuletide_procedural::{LayoutGenerator, LayoutParams, LayoutSeed};
use yuletide_shared::ViewMode;

/// Ticks while transitioning back and forth between TREE and SCATTER.
fn bench_morph_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("morph_tick");

    for particle_count in [3_000, 30_000, 300_000] {
        let params = LayoutParams {
            particle_count,
            ..LayoutParams::default()
        };
        let layout = LayoutGenerator::new(params, LayoutSeed::new(1)).generate();
        let mut engine = MorphEngine::new(&layout, MorphConfig::default());
        let controller = ViewModeController::new();

        group.throughput(criterion::Throughput::Elements(particle_count as u64));
        group.bench_with_input(
            BenchmarkId::new("tick", particle_count),
            &particle_count,
            |b, _| {
                b.iter(|| {
                    let report = engine.tick(black_box(1.0 / 60.0), &controller);
                    if !report.is_transitioning() {
                        let next = match report.active_mode {
                            ViewMode::Tree => ViewMode::Scatter,
                            _ => ViewMode::Tree,
                        };
                        controller.request(next);
                    }
                    black_box(report)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_morph_tick);
criterion_main!(benches);
