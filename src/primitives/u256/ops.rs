//! Arithmetic and bitwise operations for `U256`
//!
//! Only the operations the field and scalar layers need are provided:
//! - subtraction with an explicit borrow flag (modular reduction)
//! - wrapping subtraction
//! - logical right shift (scalar bit walking)
//!
//! All operations work on the big-endian byte array directly, with no
//! heap allocation.

use crate::primitives::U256;

use std::ops::{Shr, Sub};

impl U256 {
    /// Computes `self - rhs` modulo 2²⁵⁶ and reports whether a borrow
    /// occurred (i.e. whether `rhs > self`).
    pub fn overflowing_sub(self, rhs: U256) -> (U256, bool) {
        let mut out = [0u8; 32];
        let mut borrow = 0i16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let lhs = a as i16;
            let sub = b as i16 + borrow;

            if lhs >= sub {
                *o = (lhs - sub) as u8;
                borrow = 0;
            } else {
                *o = (lhs + 256 - sub) as u8;
                borrow = 1;
            }
        }

        (U256(out), borrow != 0)
    }
}

/// Subtraction modulo 2²⁵⁶.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.overflowing_sub(rhs).0
    }
}

/// Logical right shift (`>>`).
///
/// Shifts of 256 bits or more yield zero.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256::ZERO;
        }

        let byte_shift = (shift / 8) as usize;
        let bit_shift = shift % 8;

        let mut tmp = [0u8; 32];
        tmp[byte_shift..].copy_from_slice(&self.0[..(32 - byte_shift)]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for (o, &val) in out.iter_mut().zip(tmp.iter()) {
            *o = (val >> bit_shift) | carry;
            carry = val << (8 - bit_shift);
        }

        U256(out)
    }
}
