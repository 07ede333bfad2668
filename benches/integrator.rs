//! Benchmarks for the CPU side of a frame.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lorenz_viz::trail::fill_strip;
use lorenz_viz::{AppState, AttractorState, Config, Parameters};

fn bench_euler_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler_steps");
    let params = Parameters::CLASSIC;

    for steps in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            let mut state = AttractorState::default();
            b.iter(|| {
                for _ in 0..steps {
                    state.step(&params);
                }
                black_box(state)
            })
        });
    }

    group.finish();
}

fn bench_fill_strip(c: &mut Criterion) {
    let params = Parameters::CLASSIC;
    let mut state = AttractorState::default();
    let mut out = Vec::with_capacity(10_000);

    c.bench_function("fill_strip_10k", |b| {
        b.iter(|| {
            fill_strip(&mut state, &params, 10_000, 0.05, &mut out);
            black_box(out.len())
        })
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let mut app = AppState::new(&Config::default());

    c.bench_function("build_and_end_frame", |b| {
        b.iter(|| {
            let len = app.build_frame().trail.len();
            app.end_frame();
            black_box(len)
        })
    });
}

criterion_group!(benches, bench_euler_steps, bench_fill_strip, bench_full_frame);
criterion_main!(benches);
