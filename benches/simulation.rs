//! Simulation benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use living_pixel::{PixelConfig, PixelSimulation};

fn bench_default_run(c: &mut Criterion) {
    let config = PixelConfig::default();

    c.bench_function("default_pixel_run", |b| {
        b.iter(|| {
            let mut sim = PixelSimulation::new(black_box(config)).unwrap();
            sim.run().unwrap()
        })
    });
}

fn bench_coarse_grid_run(c: &mut Criterion) {
    let mut config = PixelConfig::default();
    config.run.sample_count = 100;

    c.bench_function("coarse_grid_run", |b| {
        b.iter(|| {
            let mut sim = PixelSimulation::new(black_box(config)).unwrap();
            sim.run().unwrap()
        })
    });
}

criterion_group!(benches, bench_default_run, bench_coarse_grid_run);
criterion_main!(benches);
