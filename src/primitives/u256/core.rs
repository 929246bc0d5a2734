//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! used for curve coordinates, scalars and digests.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Modular arithmetic lives in the field
//! and scalar types built on top of it; `U256` only carries the value and
//! the handful of bit-level operations those types need.
//!
//! The internal representation is big-endian, which matches the byte
//! layout of compressed points and SHA-256 digests.

use std::fmt::{Display, Formatter, LowerHex, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order, so the derived
/// ordering is the numeric ordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Returns the value one encoded in big-endian form.
    pub const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Parses exactly 64 hexadecimal digits (most significant first).
    ///
    /// # Panics
    ///
    /// Panics on a wrong length or a non-hex digit. Used in `const`
    /// definitions, where this turns into a compile-time error.
    pub const fn from_be_hex(hex: &str) -> Self {
        let digits = hex.as_bytes();
        assert!(digits.len() == 64, "expected 64 hexadecimal digits");

        let mut out = [0u8; 32];
        let mut i = 0;

        while i < 32 {
            out[i] = (hex_digit(digits[2 * i]) << 4) | hex_digit(digits[2 * i + 1]);
            i += 1;
        }

        U256(out)
    }

    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        U256(bytes)
    }

    pub const fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    pub fn is_odd(&self) -> bool {
        self.0[31] & 1 == 1
    }

    /// Returns bit `index`, counted from the least significant bit.
    ///
    /// Indices past 255 read as zero.
    pub fn bit(&self, index: usize) -> bool {
        if index >= 256 {
            return false;
        }

        (self.0[31 - index / 8] >> (index % 8)) & 1 == 1
    }

    /// Number of significant bits, i.e. the index of the highest set bit
    /// plus one. Zero has no significant bits.
    pub fn bits(&self) -> usize {
        256 - self.leading_zeros() as usize
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }
}

const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hexadecimal digit"),
    }
}

impl Display for U256 {
    /// Formats the value as a colon-separated hexadecimal string.
    ///
    /// Example:
    /// `00:1F:A4:...`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}

impl LowerHex for U256 {
    /// Formats the value as 64 contiguous lower-case hex digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
