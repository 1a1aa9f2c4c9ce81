//! Image preparation benchmarks
//!
//! Measures normalization, PNG encoding and command building without network I/O.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use display_client::compression::CompressionLevel;
use display_client::image::{normalize, to_rgb, NormalizeRange, PixelBuffer};
use display_client::io::image_command;
use display_client::options::ImageOptions;
use display_client::protocol::png::{encode_png, PngEncoder};

fn gradient(size: usize) -> PixelBuffer {
    PixelBuffer::from_fn(size, size, |y, x| ((x * 7 + y * 3) % 251) as f64)
}

fn bench_normalize(c: &mut Criterion) {
    let pixels = gradient(512);
    c.bench_function("normalize_512x512", |b| {
        b.iter(|| black_box(normalize(&pixels, NormalizeRange::default()).unwrap()))
    });
}

fn bench_png_encode(c: &mut Criterion) {
    let rgb = to_rgb(normalize(&gradient(512), NormalizeRange::default()).unwrap())
        .unwrap()
        .into_data();

    c.bench_function("png_encode_512x512_best", |b| {
        b.iter(|| black_box(encode_png(&rgb, 512, 512).unwrap()))
    });

    let fast = PngEncoder::new().compression_level(CompressionLevel::Fast);
    c.bench_function("png_encode_512x512_fast", |b| {
        b.iter(|| black_box(fast.encode(&rgb, 512, 512).unwrap()))
    });
}

fn bench_image_command(c: &mut Criterion) {
    let pixels = gradient(256);
    let opts = ImageOptions::new().title("bench").win("pane_bench");
    c.bench_function("image_command_256x256", |b| {
        b.iter(|| black_box(image_command(&pixels, &opts).unwrap()))
    });
}

criterion_group!(benches, bench_normalize, bench_png_encode, bench_image_command);

criterion_main!(benches);
