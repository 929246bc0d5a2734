//! Conversions between `U256` and byte or word representations
//!
//! All conversions preserve the big-endian layout of `U256` and never
//! truncate silently: narrowing from a slice is fallible.

use crate::primitives::U256;

use std::array::TryFromSliceError;

/// Converts a `U256` into its 32-byte big-endian representation.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Interprets a 32-byte array as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

/// Interprets a slice of exactly 32 bytes as a big-endian value.
impl TryFrom<&[u8]> for U256 {
    type Error = TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 32]>::try_from(value).map(U256)
    }
}

/// Places a `u64` in the least significant eight bytes.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}

/// Splits a `U256` into four `u64` words, most significant first.
impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        let mut out = [0u64; 4];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *o = u64::from_be_bytes(word);
        }

        out
    }
}

/// Builds a `U256` from four `u64` words, most significant first.
impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, word) in out.chunks_exact_mut(8).zip(value.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        U256(out)
    }
}
