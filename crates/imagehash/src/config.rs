//! TOML-driven hasher setup.
//!
//! A [`HasherConfig`] picks the algorithm, grid size and resampling filter;
//! [`HasherConfig::to_hasher`] turns it into a [`Hasher`] that applies the
//! same choice to every image.
//!
//! ```toml
//! algorithm = "average"
//! grid_size = 8
//! filter = "lanczos3"
//! ```

use crate::ahash::ahash;
use crate::bitarray::grid_bits;
use crate::dhash::{dhash, dhash_horizontal, dhash_vertical};
use crate::error::HashError;
use crate::fingerprint::Fingerprint;
use crate::sampler::{LumaImage, ResampleFilter, open_image};
use anyhow::{Context, Result};
use image::DynamicImage;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Which fingerprint to compute.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    Average,
    #[default]
    Difference,
    DifferenceHorizontal,
    DifferenceVertical,
}

impl HashAlgorithm {
    /// Fingerprint length in bytes for grid size `n`.
    pub fn fingerprint_len(&self, n: u32) -> usize {
        let bytes = grid_bits(n) / 8;
        match self {
            HashAlgorithm::Difference => bytes * 2,
            _ => bytes,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Average => write!(f, "ahash"),
            HashAlgorithm::Difference => write!(f, "dhash"),
            HashAlgorithm::DifferenceHorizontal => write!(f, "dhash-h"),
            HashAlgorithm::DifferenceVertical => write!(f, "dhash-v"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HasherConfig {
    pub algorithm: HashAlgorithm,
    /// Side length of the sampling grid. `grid_size²` must be a non-zero
    /// multiple of 8.
    pub grid_size: u32,
    /// Changing the filter changes every fingerprint it produces.
    pub filter: ResampleFilter,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            grid_size: 8,
            filter: ResampleFilter::default(),
        }
    }
}

impl HasherConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: HasherConfig = toml::from_str(content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let bits = grid_bits(self.grid_size);
        if bits == 0 || bits % 8 != 0 {
            return Err(anyhow::anyhow!(
                "grid_size {} gives {} bits, which is not a non-zero multiple of 8",
                self.grid_size,
                bits
            ));
        }
        Ok(())
    }

    pub fn to_hasher(&self) -> Hasher {
        Hasher {
            config: self.clone(),
        }
    }
}

/// Fingerprints images with one fixed algorithm, grid size and filter.
#[derive(Debug, Clone)]
pub struct Hasher {
    config: HasherConfig,
}

impl Hasher {
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Expected length of every fingerprint this hasher produces.
    pub fn fingerprint_len(&self) -> usize {
        self.config.algorithm.fingerprint_len(self.config.grid_size)
    }

    pub fn hash_image(&self, image: &DynamicImage) -> Result<Fingerprint, HashError> {
        let luma = LumaImage::new(image).with_filter(self.config.filter);
        let n = self.config.grid_size;
        match self.config.algorithm {
            HashAlgorithm::Average => ahash(&luma, n),
            HashAlgorithm::Difference => dhash(&luma, n),
            HashAlgorithm::DifferenceHorizontal => dhash_horizontal(&luma, n),
            HashAlgorithm::DifferenceVertical => dhash_vertical(&luma, n),
        }
    }

    pub fn hash_file<P: AsRef<Path>>(&self, path: P) -> Result<Fingerprint, HashError> {
        let image = open_image(path)?;
        let fingerprint = self.hash_image(&image)?;
        debug!("{} fingerprint: {}", self.config.algorithm, fingerprint);
        Ok(fingerprint)
    }
}
