#![allow(dead_code)]

use image::{DynamicImage, Luma, Rgb, RgbImage};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness.
/// Override the level with RUST_LOG, e.g. RUST_LOG=imagehash=trace
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("imagehash=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn white(size: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(size, size, Rgb([255, 255, 255])))
}

/// Gray ramp rising twice as fast to the right as it does downwards, so
/// no two cells of a coarse grid share the same brightness.
pub fn ramp(size: u32) -> DynamicImage {
    let image = image::ImageBuffer::from_fn(size, size, |x, y| {
        let u = (x as f64 + 0.5) / size as f64;
        let v = (y as f64 + 0.5) / size as f64;
        Luma([(255.0 * (2.0 * u + v) / 3.0).round() as u8])
    });
    DynamicImage::ImageLuma8(image)
}

pub fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}
