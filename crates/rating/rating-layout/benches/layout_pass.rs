//! Criterion benchmarks for the layout pass.
//!
//! Run: cargo bench -p rating-layout --bench layout_pass
//!
//! Results show:
//!   compute_*      : full measure + wrap + slots + fill for varying star counts
//!   refill         : rating-only change on an existing pass
//!   quantize       : step quantization alone

#![allow(missing_docs)] // criterion_group! macro generates undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use embedded_graphics::prelude::Size;
use rating_layout::prelude::*;
use rating_layout::quantize::quantize;

fn config(stars: u32) -> LayoutConfig {
    LayoutConfig::new(stars, Size::new(24, 24))
        .spacing(4, 4)
        .padding(Edges::all(8))
        .gravity(Gravity::CENTER)
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    let rating = RatingInput::new(3.7).max_rating(5.0);

    for stars in [5u32, 16, 64] {
        let config = config(stars);
        group.bench_with_input(BenchmarkId::from_parameter(stars), &config, |b, config| {
            b.iter(|| {
                RatingLayout::compute(
                    black_box(config),
                    black_box(&rating),
                    MeasureSpec::at_most(240),
                    MeasureSpec::unconstrained(),
                )
            });
        });
    }
    group.finish();
}

fn bench_refill(c: &mut Criterion) {
    let config = config(16);
    let pass = RatingLayout::compute(
        &config,
        &RatingInput::new(1.0),
        MeasureSpec::at_most(240),
        MeasureSpec::unconstrained(),
    );
    let rating = RatingInput::new(11.25).step(0.25);

    c.bench_function("refill", |b| {
        b.iter(|| pass.refilled(black_box(&config), black_box(&rating)));
    });
}

fn bench_quantize(c: &mut Criterion) {
    c.bench_function("quantize", |b| {
        b.iter(|| quantize(black_box(7.3), black_box(10.0), black_box(5), black_box(0.5)));
    });
}

criterion_group!(benches, bench_compute, bench_refill, bench_quantize);
criterion_main!(benches);
