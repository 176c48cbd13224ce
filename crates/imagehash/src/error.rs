use thiserror::Error;

/// Failures produced while building a fingerprint.
#[derive(Debug, Error)]
pub enum HashError {
    /// The requested bit count is zero or not a multiple of 8.
    #[error("bit capacity must be a non-zero multiple of 8, got {bits}")]
    InvalidCapacity { bits: usize },

    /// A bit value other than 0 or 1 was appended.
    #[error("can only append 0 or 1, got {0}")]
    InvalidBitValue(u8),

    /// The buffer already holds its declared number of bits.
    #[error("cannot append to a full bit array ({capacity} bits)")]
    BufferFull { capacity: usize },

    /// A luminance grid was built from a sample vector of the wrong length.
    #[error("luminance grid {width}x{height} does not fit {len} samples")]
    InvalidGrid { width: u32, height: u32, len: usize },

    /// A sampler returned a grid of a different shape than requested.
    #[error("sampler returned a {width}x{height} grid, expected {expected_width}x{expected_height}")]
    UnexpectedGridSize {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    /// The image collaborator failed to decode or convert the input.
    #[error("failed to decode image: {0}")]
    UpstreamDecodeFailure(#[from] image::ImageError),
}
