//! Grayscale + resize, the only thing the hash algorithms need from an image.
//!
//! Decoding and resampling are done by the `image` crate; grayscale uses
//! Rec.601 weights computed here.
//! The algorithms only see a [`LuminanceGrid`] of the exact size they asked
//! for, obtained through the [`PixelSampler`] trait.

use crate::error::HashError;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Read-only grid of 16-bit luminance samples, stored row by row.
///
/// Only the hash algorithms read individual samples; callers see the shape.
///
/// ```compile_fail
/// let grid = imagehash::LuminanceGrid::from_fn(2, 2, |x, y| (x + y) as u16);
/// let _ = grid.get(1, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceGrid {
    width: u32,
    height: u32,
    samples: Vec<u16>,
}

impl LuminanceGrid {
    /// Build a grid from row-major samples.
    pub fn new(width: u32, height: u32, samples: Vec<u16>) -> Result<Self, HashError> {
        if samples.len() != width as usize * height as usize {
            return Err(HashError::InvalidGrid {
                width,
                height,
                len: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every position.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u16) -> Self {
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at column `x`, row `y`. Panics when out of bounds.
    pub(crate) fn get(&self, x: u32, y: u32) -> u16 {
        assert!(x < self.width && y < self.height, "sample out of bounds");
        self.samples[y as usize * self.width as usize + x as usize]
    }
}

/// Source of resized luminance samples.
///
/// Implementations convert to grayscale and resize to exactly
/// `width x height` with a fixed, deterministic filter. The same input and
/// size must always give the same grid, since fingerprints are compared
/// byte for byte.
pub trait PixelSampler {
    fn sample(&self, width: u32, height: u32) -> Result<LuminanceGrid, HashError>;
}

impl<S: PixelSampler + ?Sized> PixelSampler for &S {
    fn sample(&self, width: u32, height: u32) -> Result<LuminanceGrid, HashError> {
        (**self).sample(width, height)
    }
}

/// Sample `width x height` and reject grids of any other shape.
pub(crate) fn sample_exact<S: PixelSampler + ?Sized>(
    sampler: &S,
    width: u32,
    height: u32,
) -> Result<LuminanceGrid, HashError> {
    let grid = sampler.sample(width, height)?;
    if grid.width != width || grid.height != height {
        return Err(HashError::UnexpectedGridSize {
            expected_width: width,
            expected_height: height,
            width: grid.width,
            height: grid.height,
        });
    }
    Ok(grid)
}

/// Resampling filter used when shrinking an image to the sampling grid.
///
/// Fingerprint bytes depend on the filter, so hashes are only comparable
/// when they were computed with the same one.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Rec.601 luma of an 8-bit RGB pixel, rounded half up.
///
/// Not the Rec.709 weights `image` uses in `to_luma8`; stored fingerprints
/// were computed with these.
fn rec601_luma(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    (y + 0.5) as u8
}

/// An image already converted to 8-bit grayscale.
///
/// Resampling happens at 8-bit depth; samples are widened to 16 bits
/// (`v * 257`) when a grid is produced. Alpha is ignored.
///
/// Converting once and sampling several times is what the two-pass
/// difference hash does.
#[derive(Debug, Clone)]
pub struct LumaImage {
    pixels: GrayImage,
    filter: ResampleFilter,
}

impl LumaImage {
    pub fn new(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let pixels = ImageBuffer::from_fn(rgb.width(), rgb.height(), |x, y| {
            let [r, g, b] = rgb.get_pixel(x, y).0;
            Luma([rec601_luma(r, g, b)])
        });
        Self {
            pixels,
            filter: ResampleFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> ResampleFilter {
        self.filter
    }
}

impl PixelSampler for LumaImage {
    fn sample(&self, width: u32, height: u32) -> Result<LuminanceGrid, HashError> {
        let resized = imageops::resize(&self.pixels, width, height, self.filter.into());
        let (width, height) = resized.dimensions();
        let samples = resized.pixels().map(|p| u16::from(p[0]) * 257).collect();
        LuminanceGrid::new(width, height, samples)
    }
}

impl PixelSampler for DynamicImage {
    fn sample(&self, width: u32, height: u32) -> Result<LuminanceGrid, HashError> {
        LumaImage::new(self).sample(width, height)
    }
}

/// Decode an image file.
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, HashError> {
    let path = path.as_ref();
    let image = image::open(path)?;
    debug!(
        "Opened image {:?} ({}x{})",
        path,
        image.width(),
        image.height()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_grid_rejects_wrong_len() {
        assert!(matches!(
            LuminanceGrid::new(3, 2, vec![0; 5]),
            Err(HashError::InvalidGrid {
                width: 3,
                height: 2,
                len: 5
            })
        ));
    }

    #[test]
    fn test_grid_is_row_major() {
        let grid = LuminanceGrid::new(3, 2, vec![0, 1, 2, 10, 11, 12]).unwrap();
        assert_eq!(grid.get(2, 0), 2);
        assert_eq!(grid.get(0, 1), 10);
        assert_eq!(grid, LuminanceGrid::from_fn(3, 2, |x, y| (y * 10 + x) as u16));
    }

    #[test]
    fn test_resize_to_requested_size() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 48, Rgb([255, 255, 255])));
        let grid = img.sample(9, 8).unwrap();
        assert_eq!((grid.width(), grid.height()), (9, 8));
        for y in 0..8 {
            for x in 0..9 {
                assert_eq!(grid.get(x, y), u16::MAX);
            }
        }
    }

    fn solid(r: u8, g: u8, b: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([r, g, b])))
    }

    fn sample_value(image: &DynamicImage) -> u16 {
        let grid = image.sample(2, 2).unwrap();
        grid.get(0, 0)
    }

    #[test]
    fn test_rec601_weights() {
        assert_eq!(rec601_luma(255, 0, 0), 76);
        assert_eq!(rec601_luma(0, 255, 0), 150);
        assert_eq!(rec601_luma(0, 0, 255), 29);
        assert_eq!(rec601_luma(255, 255, 255), 255);
        assert_eq!(rec601_luma(0, 0, 0), 0);
        assert_eq!(rec601_luma(128, 128, 128), 128);
    }

    #[test]
    fn test_grayscale_uses_rec601() {
        // Rec.709 would give 54 for pure red.
        assert_eq!(sample_value(&solid(255, 0, 0)), 76 * 257);
        assert_eq!(sample_value(&solid(0, 255, 0)), 150 * 257);
        assert_eq!(sample_value(&solid(0, 0, 255)), 29 * 257);
        assert_eq!(sample_value(&solid(200, 200, 200)), 200 * 257);
    }

    #[test]
    fn test_filter_is_configurable() {
        let img = DynamicImage::new_rgb8(10, 10);
        let luma = LumaImage::new(&img).with_filter(ResampleFilter::Nearest);
        assert_eq!(luma.filter(), ResampleFilter::Nearest);
        assert_eq!(luma.sample(4, 4).unwrap(), LuminanceGrid::new(4, 4, vec![0; 16]).unwrap());
    }

    struct WrongShape;

    impl PixelSampler for WrongShape {
        fn sample(&self, _width: u32, _height: u32) -> Result<LuminanceGrid, HashError> {
            LuminanceGrid::new(2, 2, vec![0; 4])
        }
    }

    #[test]
    fn test_sample_exact_rejects_other_shapes() {
        assert!(matches!(
            sample_exact(&WrongShape, 8, 9),
            Err(HashError::UnexpectedGridSize {
                expected_width: 8,
                expected_height: 9,
                width: 2,
                height: 2
            })
        ));
        let message = sample_exact(&WrongShape, 8, 9).unwrap_err().to_string();
        assert_eq!(message, "sampler returned a 2x2 grid, expected 8x9");
        assert!(sample_exact(&WrongShape, 2, 2).is_ok());
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            open_image("does/not/exist.png"),
            Err(HashError::UpstreamDecodeFailure(_))
        ));
    }
}
