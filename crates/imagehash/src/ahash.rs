//! Average hash (aHash).
//!
//! The image is reduced to an `n x n` luminance grid and every sample is
//! compared against the grid's mean: brighter than the mean gives a `1`,
//! anything else a `0`.

use crate::bitarray::{BitArray, grid_bits};
use crate::error::HashError;
use crate::fingerprint::Fingerprint;
use crate::sampler::{PixelSampler, sample_exact};
use tracing::{debug, trace};

/// Compute the `n²/8`-byte average hash of `image`.
///
/// Samples are visited column by column (outer loop over x, inner loop
/// over y), and bits are emitted in that same order. Stored fingerprints
/// depend on this layout.
///
/// Fails with [`HashError::InvalidCapacity`] unless `n²` is a non-zero
/// multiple of 8.
pub fn ahash<S: PixelSampler + ?Sized>(image: &S, n: u32) -> Result<Fingerprint, HashError> {
    let mut bits = BitArray::new(grid_bits(n))?;
    let grid = sample_exact(image, n, n)?;

    let mut sum: u64 = 0;
    let mut values = Vec::with_capacity(bits.capacity());
    for x in 0..n {
        for y in 0..n {
            let value = grid.get(x, y);
            sum += u64::from(value);
            values.push(value);
        }
    }

    let mean = sum / values.len() as u64;
    trace!("ahash {}x{}: mean luminance {}", n, n, mean);

    for value in values {
        bits.push(u64::from(value) > mean)?;
    }

    let fingerprint = bits.into_fingerprint();
    debug!("ahash {}x{}: {}", n, n, fingerprint);
    Ok(fingerprint)
}
