//! Difference hash (dHash).
//!
//! Each bit records whether luminance rises between two neighbouring
//! samples. The horizontal pass shrinks the image to `(n + 1) x n` and walks
//! each row; the vertical pass shrinks it to `n x (n + 1)` and walks each
//! column. Either pass yields `n²` bits.

use crate::bitarray::{BitArray, grid_bits};
use crate::error::HashError;
use crate::fingerprint::Fingerprint;
use crate::sampler::{LumaImage, LuminanceGrid, PixelSampler, sample_exact};
use image::DynamicImage;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
}

/// Horizontal gradient bits followed by vertical gradient bits.
///
/// Each half is `n²/8` bytes and starts on its own byte boundary.
pub fn dhash<S: PixelSampler + ?Sized>(image: &S, n: u32) -> Result<Fingerprint, HashError> {
    let horizontal = gradient(image, n, Direction::Horizontal);
    let vertical = gradient(image, n, Direction::Vertical);
    let fingerprint = horizontal?.concat(vertical?);
    debug!("dhash {}x{}: {}", n, n, fingerprint);
    Ok(fingerprint)
}

/// [`dhash`] for a decoded image, converting it to grayscale only once.
pub fn dhash_image(image: &DynamicImage, n: u32) -> Result<Fingerprint, HashError> {
    dhash(&LumaImage::new(image), n)
}

/// Row-wise gradient bits only.
pub fn dhash_horizontal<S: PixelSampler + ?Sized>(
    image: &S,
    n: u32,
) -> Result<Fingerprint, HashError> {
    gradient(image, n, Direction::Horizontal)
}

/// Column-wise gradient bits only.
pub fn dhash_vertical<S: PixelSampler + ?Sized>(
    image: &S,
    n: u32,
) -> Result<Fingerprint, HashError> {
    gradient(image, n, Direction::Vertical)
}

fn gradient<S: PixelSampler + ?Sized>(
    image: &S,
    n: u32,
    direction: Direction,
) -> Result<Fingerprint, HashError> {
    let mut bits = BitArray::new(grid_bits(n))?;

    // One extra sample along the walking direction, so every line yields n
    // comparisons.
    let (width, height) = match direction {
        Direction::Horizontal => (n + 1, n),
        Direction::Vertical => (n, n + 1),
    };
    let grid = sample_exact(image, width, height)?;

    for line in 0..n {
        compare_line(&grid, line, direction, &mut bits)?;
    }

    let fingerprint = bits.into_fingerprint();
    debug!("dhash {:?} {}x{}: {}", direction, n, n, fingerprint);
    Ok(fingerprint)
}

/// Emit one bit per neighbouring pair along a row (horizontal) or column
/// (vertical): `1` when the earlier sample is darker than the later one.
fn compare_line(
    grid: &LuminanceGrid,
    line: u32,
    direction: Direction,
    bits: &mut BitArray,
) -> Result<(), HashError> {
    let len = match direction {
        Direction::Horizontal => grid.width(),
        Direction::Vertical => grid.height(),
    };
    let at = |i: u32| match direction {
        Direction::Horizontal => grid.get(i, line),
        Direction::Vertical => grid.get(line, i),
    };

    let mut prev = 0;
    for i in 0..len {
        let current = at(i);
        if i > 0 {
            bits.push(prev < current)?;
        }
        prev = current;
    }
    Ok(())
}
