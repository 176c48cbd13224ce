//! Sequential, MSB-first bit packing.
//!
//! Fingerprints are produced one decision at a time. `BitArray` packs those
//! decisions into a fixed number of bytes, filling each byte from bit 7 down
//! to bit 0 before moving on to the next one.
//!
//! ```
//! use imagehash::bitarray::BitArray;
//!
//! let mut bits = BitArray::new(16)?;
//! bits.append_bit(1)?;
//! bits.append_bit(0)?;
//! bits.append_bit(1)?;
//! assert_eq!(bits.as_bytes(), &[0b1010_0000, 0x00]);
//! # Ok::<(), imagehash::HashError>(())
//! ```

use crate::error::HashError;
use crate::fingerprint::Fingerprint;

/// Fixed-capacity buffer filled one bit at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    bytes: Vec<u8>,
    byte_idx: usize,
    bit_idx: u8,
}

impl BitArray {
    /// Create a zeroed buffer holding `bits` bits.
    ///
    /// `bits` must be a non-zero multiple of 8.
    pub fn new(bits: usize) -> Result<Self, HashError> {
        if bits == 0 || bits % 8 != 0 {
            return Err(HashError::InvalidCapacity { bits });
        }

        Ok(Self {
            bytes: vec![0; bits / 8],
            byte_idx: 0,
            bit_idx: 7,
        })
    }

    /// Append a single bit, which must be `0` or `1`.
    pub fn append_bit(&mut self, bit: u8) -> Result<(), HashError> {
        if self.is_full() {
            return Err(HashError::BufferFull {
                capacity: self.capacity(),
            });
        }

        match bit {
            0 => {}
            1 => self.bytes[self.byte_idx] |= 1 << self.bit_idx,
            other => return Err(HashError::InvalidBitValue(other)),
        }

        if self.bit_idx > 0 {
            self.bit_idx -= 1;
        } else {
            self.byte_idx += 1;
            self.bit_idx = 7;
        }

        Ok(())
    }

    pub fn push(&mut self, bit: bool) -> Result<(), HashError> {
        self.append_bit(u8::from(bit))
    }

    /// Current contents. Positions not yet written read as zero.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bits appended so far.
    pub fn len(&self) -> usize {
        self.byte_idx * 8 + (7 - self.bit_idx as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn is_full(&self) -> bool {
        self.byte_idx == self.bytes.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn into_fingerprint(self) -> Fingerprint {
        Fingerprint::from(self.bytes)
    }
}

/// Bits needed for an `n x n` comparison grid.
///
/// Saturates instead of overflowing; a saturated count is odd and is
/// rejected by [`BitArray::new`].
pub(crate) fn grid_bits(n: u32) -> usize {
    (n as usize).saturating_mul(n as usize)
}
