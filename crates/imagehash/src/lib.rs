//! Perceptual image fingerprints.
//!
//! Two algorithms turn an image into a short byte string so that similar
//! images give similar bytes:
//!
//! - [`ahash`]: each sample of an `n x n` grid against the grid's mean.
//! - [`dhash`]: each sample against its neighbour, along rows and along
//!   columns ([`dhash_horizontal`], [`dhash_vertical`] for a single pass).
//!
//! Fingerprints are compared with [`distance`].
//!
//! ```no_run
//! let a = imagehash::open_image("a.png")?;
//! let b = imagehash::open_image("b.png")?;
//! let (ha, hb) = (imagehash::dhash_image(&a, 8)?, imagehash::dhash_image(&b, 8)?);
//! println!("{} vs {}: {}/{}", ha, hb, ha.distance(&hb), ha.distance_max_range(&hb));
//! # Ok::<(), imagehash::HashError>(())
//! ```

pub mod ahash;
pub mod bitarray;
pub mod config;
pub mod dhash;
pub mod distance;
pub mod error;
pub mod fingerprint;
pub mod sampler;

pub use crate::ahash::ahash;
pub use crate::bitarray::BitArray;
pub use crate::config::{HashAlgorithm, Hasher, HasherConfig};
pub use crate::dhash::{dhash, dhash_horizontal, dhash_image, dhash_vertical};
pub use crate::distance::{distance, distance_max_range};
pub use crate::error::HashError;
pub use crate::fingerprint::Fingerprint;
pub use crate::sampler::{LumaImage, LuminanceGrid, PixelSampler, ResampleFilter, open_image};
