// SPDX-License-Identifier: MPL-2.0
use card_deck::media::color_sampler::{sample, ColorHistogram};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use image_rs::{DynamicImage, Rgba, RgbaImage};
use std::hint::black_box;

/// Synthetic card: a gray field with a saturated diagonal band.
fn synthetic_card(size: u32) -> DynamicImage {
    let image = RgbaImage::from_fn(size, size, |x, y| {
        if x.abs_diff(y) < size / 8 {
            Rgba([220, 40, 60, 255])
        } else {
            Rgba([(x % 256) as u8 / 2 + 60, 110, (y % 256) as u8 / 2 + 60, 255])
        }
    });
    DynamicImage::ImageRgba8(image)
}

fn color_sampling_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_sampling");

    for size in [40u32, 512, 2048] {
        let card = synthetic_card(size);
        group.bench_with_input(BenchmarkId::new("sample", size), &card, |b, card| {
            b.iter(|| black_box(sample(black_box(card))));
        });
    }

    let raster = synthetic_card(40).to_rgba8();
    group.bench_function("histogram_40x40", |b| {
        b.iter(|| black_box(ColorHistogram::from_raster(black_box(&raster)).dominant()));
    });

    group.finish();
}

criterion_group!(benches, color_sampling_benchmark);
criterion_main!(benches);
