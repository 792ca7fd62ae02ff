//! Benchmarks for the pxavatar pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pxavatar::render::{quantize, SheetPacker};
use pxavatar::{encode_animation, render, Archetype, Canvas, Raster, Tier, Variant};

fn grand_master() -> Archetype {
    Archetype::Tier(Tier::GrandMaster)
}

// -- Compositing benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let canvas = Canvas::default();

    let sprite = grand_master().sprite();
    let spec = grand_master().animations(Variant::Advanced).action;

    group.bench_function("build_sprite", |b| b.iter(|| black_box(grand_master()).sprite()));

    group.bench_function("render_grid", |b| {
        b.iter(|| render(black_box(&sprite), &canvas))
    });

    if let Some(spec) = spec {
        group.bench_function("transform_action_frame", |b| {
            b.iter(|| spec.frame(black_box(&sprite), 7))
        });
    }

    group.finish();
}

// -- Upscaling benchmarks --

fn bench_upscale(c: &mut Criterion) {
    let mut group = c.benchmark_group("upscale");
    let raster = render(&grand_master().sprite(), &Canvas::default());

    group.bench_function("upscale_128", |b| {
        b.iter(|| black_box(&raster).upscale(128).unwrap())
    });

    group.bench_function("upscale_512", |b| {
        b.iter(|| black_box(&raster).upscale(512).unwrap())
    });

    group.finish();
}

// -- Encoding benchmarks --

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    let canvas = Canvas::default();
    let archetype = grand_master();
    let sprite = archetype.sprite();
    let idle = archetype.animations(Variant::Early).idle;

    let frames: Vec<Raster> = idle
        .sequence(&sprite, canvas, 128)
        .unwrap()
        .map(|(_, r)| r)
        .collect();

    group.bench_function("quantize_frame_128", |b| {
        b.iter(|| quantize(black_box(&frames[0]), &[]))
    });

    group.bench_function("encode_idle_gif_128", |b| {
        b.iter(|| encode_animation(black_box(frames.clone()), idle.duration_ms, canvas.background).unwrap())
    });

    let cells: Vec<(String, Raster)> = Tier::ALL
        .iter()
        .map(|&t| {
            let a = Archetype::Tier(t);
            (a.id(), render(&a.sprite(), &canvas).upscale(128).unwrap())
        })
        .collect();
    let packer = SheetPacker::new(4, canvas.background);
    group.bench_function("pack_tier_sheet", |b| b.iter(|| packer.pack(black_box(&cells))));

    group.finish();
}

criterion_group!(benches, bench_rendering, bench_upscale, bench_encoding);
criterion_main!(benches);
