//! Benchmarks for full-set recomputation
//!
//! Every publication recomputes every declared prop, so cost grows with the
//! size of the set.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scaled_props::binder::compute_scaled_props;
use scaled_props::models::{Axis, ScalableProp, ScalablePropSet, SurfaceBounds, SurfaceContext, SurfaceState};
use scaled_props::scale::scale;

/// A set of `count` props alternating between width and height, with every
/// third prop overriding its bounds.
fn generate_props(count: usize) -> ScalablePropSet {
    let mut set = ScalablePropSet::new();
    for i in 0..count {
        let mut prop = ScalableProp::new(i as f64, i as f64 + 10.0);
        if i % 2 == 1 {
            prop = prop.scaled_by(Axis::Height);
        }
        if i % 3 == 0 {
            prop = prop.with_bounds_override(20.0, 300.0);
        }
        // Generated props are always valid.
        let _ = set.insert(format!("prop{}", i), prop);
    }
    set
}

fn context(width: f64, height: f64) -> SurfaceContext {
    SurfaceContext::new(
        SurfaceBounds::new()
            .with_width(40.0, 200.0)
            .with_height(10.0, 60.0),
        SurfaceState::new(width, height),
    )
}

fn bench_scale(c: &mut Criterion) {
    c.bench_function("scale_interpolate", |b| {
        b.iter(|| {
            scale(
                black_box(Some(800.0)),
                black_box(400.0),
                black_box(1200.0),
                black_box(20.0),
                black_box(40.0),
            )
        })
    });
}

fn bench_compute_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_scaled_props");
    let ctx = context(120.0, 35.0);

    for size in [1, 10, 50, 200].iter() {
        let specs = generate_props(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(format!("{}_props", size)), &specs, |b, specs| {
            b.iter(|| {
                let scaled = compute_scaled_props(black_box(specs), black_box(&ctx));
                black_box(scaled)
            });
        });
    }

    group.finish();
}

/// A resize sweep: one recomputation per column count.
fn bench_resize_sweep(c: &mut Criterion) {
    let specs = generate_props(25);

    c.bench_function("resize_sweep_40_to_200", |b| {
        b.iter(|| {
            for width in 40..=200 {
                let scaled = compute_scaled_props(&specs, &context(width as f64, 35.0));
                black_box(scaled);
            }
        })
    });
}

criterion_group!(benches, bench_scale, bench_compute_set, bench_resize_sweep);
criterion_main!(benches);
