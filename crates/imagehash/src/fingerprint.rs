//! The byte string produced by every hash algorithm.

use crate::distance;
use std::fmt;
use std::str::FromStr;

/// Packed-bit summary of an image.
///
/// Two fingerprints are equal when their bytes are equal; nothing records
/// which algorithm or grid size produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Fingerprint(Vec<u8>);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Lowercase hex rendering, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(s).map(Self)
    }

    /// Byte-granular distance to `other`, see [`distance::distance`].
    pub fn distance(&self, other: &Fingerprint) -> usize {
        distance::distance(&self.0, &other.0)
    }

    pub fn distance_max_range(&self, other: &Fingerprint) -> usize {
        distance::distance_max_range(&self.0, &other.0)
    }

    /// Append `other` after this fingerprint's bytes.
    pub(crate) fn concat(mut self, other: Fingerprint) -> Fingerprint {
        self.0.extend(other.0);
        self
    }
}

impl From<Vec<u8>> for Fingerprint {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Fingerprint {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Fingerprint {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
