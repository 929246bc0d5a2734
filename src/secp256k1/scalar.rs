//! Scalars modulo the secp256k1 group order.
//!
//! A [`Scalar`] is always reduced into `[0, n)`. Construction reduces,
//! so any 256-bit integer (a hash digest, say) is a valid input, and
//! negative integers wrap around the way modular arithmetic expects:
//! `-1` becomes `n − 1`.

use crate::primitives::U256;

use std::ops::Neg;

/// The group order `n` of the secp256k1 generator.
pub const CURVE_ORDER: U256 =
    U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// An integer modulo the curve order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scalar(U256);

impl Scalar {
    pub const ZERO: Self = Scalar(U256::ZERO);
    pub const ONE: Self = Scalar(U256::ONE);

    /// Reduces `value` modulo `n`.
    ///
    /// Since `2n > 2²⁵⁶`, one conditional subtraction is always enough.
    pub fn new(value: U256) -> Self {
        let (reduced, borrow) = value.overflowing_sub(CURVE_ORDER);

        if borrow { Scalar(value) } else { Scalar(reduced) }
    }

    /// Interprets 32 big-endian bytes as an integer and reduces it.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Scalar::new(U256::from_be_bytes(bytes))
    }

    /// The canonical representative in `[0, n)`.
    pub fn to_u256(self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar(U256::from(value))
    }
}

/// Negative values map to `n − |value|`.
impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        let magnitude = Scalar::from(value.unsigned_abs());

        if value < 0 { -magnitude } else { magnitude }
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }

        Scalar(CURVE_ORDER - self.0)
    }
}
