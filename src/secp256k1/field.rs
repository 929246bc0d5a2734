//! Finite field arithmetic for secp256k1.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁶ − 2³² − 977
//! ```
//!
//! over which the secp256k1 curve is defined.
//!
//! ## Representation
//!
//! Field elements are four 64-bit limbs, least significant first, and are
//! kept fully reduced into `[0, p)` after every operation. Equality is
//! therefore plain limb equality.
//!
//! ## Reduction
//!
//! Because `p = 2²⁵⁶ − C` with `C = 2³² + 977`, a 512-bit product
//! `H·2²⁵⁶ + L` is congruent to `H·C + L`. Two folds bring any product
//! below 2²⁵⁶, and one conditional subtraction finishes the job.
//!
//! ## Inversion and square roots
//!
//! Both are single exponentiations:
//! - `x⁻¹ = x^(p−2)` (Fermat), which maps zero to zero
//! - `√x = x^((p+1)/4)`, valid because `p ≡ 3 (mod 4)`
//!
//! The square root is not canonicalised and is not checked: for a
//! non-residue the result simply does not square back to `x`.
//!
//! Nothing here is constant-time.

use crate::primitives::U256;

use std::fmt::{Display, Formatter, LowerHex, Result};
use std::ops::{Add, Mul, Neg, Sub};

/// The field prime `p = 2²⁵⁶ − 2³² − 977`.
pub const FIELD_PRIME: U256 =
    U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

/// `p − 2`, the inversion exponent.
const P_MINUS_2: U256 =
    U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2d");

/// `(p + 1) / 4`, the square-root exponent.
const P_PLUS_1_DIV_4: U256 =
    U256::from_be_hex("3fffffffffffffffffffffffffffffffffffffffffffffffffffffffbfffff0c");

/// Limbs of `p`, least significant first.
const P: [u64; 4] = [
    0xFFFF_FFFE_FFFF_FC2F,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// `2²⁵⁶ − p`.
const C: u64 = 0x1_0000_03D1;

/// An element of the secp256k1 base field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldElement([u64; 4]);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = FieldElement([0, 0, 0, 0]);

    /// The multiplicative identity.
    pub const ONE: Self = FieldElement([1, 0, 0, 0]);

    /// Builds a field element from 64 hex digits.
    ///
    /// # Panics
    ///
    /// Panics if the digits are malformed or encode a value `>= p`. Meant
    /// for constants, where this is a compile-time error.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = U256::from_be_hex(hex).to_be_bytes();

        let mut limbs = [0u64; 4];
        let mut i = 0;

        while i < 32 {
            limbs[3 - i / 8] |= (bytes[i] as u64) << (8 * (7 - i % 8));
            i += 1;
        }

        assert!(!ge_p(&limbs), "value is not below the field prime");

        FieldElement(limbs)
    }

    /// Converts a canonical integer into a field element.
    ///
    /// Returns `None` if `value >= p`; no implicit reduction takes place.
    pub fn from_u256(value: U256) -> Option<Self> {
        let words: [u64; 4] = value.into();
        let limbs = [words[3], words[2], words[1], words[0]];

        if ge_p(&limbs) {
            return None;
        }

        Some(FieldElement(limbs))
    }

    pub const fn from_u64(value: u64) -> Self {
        FieldElement([value, 0, 0, 0])
    }

    pub fn to_u256(self) -> U256 {
        let [l0, l1, l2, l3] = self.0;
        U256::from([l3, l2, l1, l0])
    }

    /// 32-byte big-endian encoding.
    pub fn to_be_bytes(self) -> [u8; 32] {
        self.to_u256().into()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0, 0, 0, 0]
    }

    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    pub fn square(self) -> Self {
        self * self
    }

    /// Left-to-right square-and-multiply exponentiation.
    pub fn pow(self, exponent: &U256) -> Self {
        let mut acc = FieldElement::ONE;

        for i in (0..exponent.bits()).rev() {
            acc = acc.square();

            if exponent.bit(i) {
                acc = acc * self;
            }
        }

        acc
    }

    /// Multiplicative inverse, `x^(p−2)`.
    ///
    /// Zero has no inverse; exponentiation maps it to zero, and callers are
    /// expected never to rely on that value.
    pub fn invert(self) -> Self {
        self.pow(&P_MINUS_2)
    }

    /// One of the two square roots of `self`, `x^((p+1)/4)`.
    ///
    /// Either `r` or `p − r` may come back. If `self` is not a quadratic
    /// residue the result does not square to `self`; callers must check.
    pub fn sqrt(self) -> Self {
        self.pow(&P_PLUS_1_DIV_4)
    }
}

/// `limbs >= p`, for little-endian limbs.
const fn ge_p(limbs: &[u64; 4]) -> bool {
    let mut i = 4;

    while i > 0 {
        i -= 1;

        if limbs[i] != P[i] {
            return limbs[i] > P[i];
        }
    }

    true
}

/// Subtracts `p` from `limbs`, wrapping modulo 2²⁵⁶.
fn sub_p(limbs: &mut [u64; 4]) {
    let mut borrow = false;

    for (l, &p) in limbs.iter_mut().zip(P.iter()) {
        let (d1, b1) = l.overflowing_sub(p);
        let (d2, b2) = d1.overflowing_sub(borrow as u64);
        *l = d2;
        borrow = b1 || b2;
    }
}

/// Adds the small constant `c` into `limbs`, returning the carry out.
fn add_small(limbs: &mut [u64; 4], c: u128) -> bool {
    let mut carry = c;

    for l in limbs.iter_mut() {
        let t = *l as u128 + carry;
        *l = t as u64;
        carry = t >> 64;
    }

    carry != 0
}

/// Reduces a 512-bit product (little-endian limbs) modulo `p`.
fn reduce_wide(wide: [u64; 8]) -> [u64; 4] {
    // First fold: L + H·C, at most 2²⁵⁶ · 2³⁴.
    let mut folded = [0u64; 5];
    let mut carry = 0u128;

    for i in 0..4 {
        let t = wide[i] as u128 + (wide[i + 4] as u128) * (C as u128) + carry;
        folded[i] = t as u64;
        carry = t >> 64;
    }
    folded[4] = carry as u64;

    // Second fold of the small top limb.
    let mut out = [folded[0], folded[1], folded[2], folded[3]];

    if add_small(&mut out, (folded[4] as u128) * (C as u128)) {
        // Wrapped past 2²⁵⁶: the remainder is tiny, so this cannot carry.
        add_small(&mut out, C as u128);
    }

    if ge_p(&out) {
        sub_p(&mut out);
    }

    out
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> Self::Output {
        let mut out = [0u64; 4];
        let mut carry = false;

        for ((o, &a), &b) in out.iter_mut().zip(self.0.iter()).zip(rhs.0.iter()) {
            let (s1, c1) = a.overflowing_add(b);
            let (s2, c2) = s1.overflowing_add(carry as u64);
            *o = s2;
            carry = c1 || c2;
        }

        // Sum < 2p, so a single correction is enough.
        if carry || ge_p(&out) {
            sub_p(&mut out);
        }

        FieldElement(out)
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> Self::Output {
        let mut out = [0u64; 4];
        let mut borrow = false;

        for ((o, &a), &b) in out.iter_mut().zip(self.0.iter()).zip(rhs.0.iter()) {
            let (d1, b1) = a.overflowing_sub(b);
            let (d2, b2) = d1.overflowing_sub(borrow as u64);
            *o = d2;
            borrow = b1 || b2;
        }

        if borrow {
            // Adding p modulo 2²⁵⁶ is subtracting C.
            let mut carry = false;

            for (o, &p) in out.iter_mut().zip(P.iter()) {
                let (s1, c1) = o.overflowing_add(p);
                let (s2, c2) = s1.overflowing_add(carry as u64);
                *o = s2;
                carry = c1 || c2;
            }
        }

        FieldElement(out)
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> Self::Output {
        let mut wide = [0u64; 8];

        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u128;

            for (j, &b) in rhs.0.iter().enumerate() {
                let t = wide[i + j] as u128 + (a as u128) * (b as u128) + carry;
                wide[i + j] = t as u64;
                carry = t >> 64;
            }

            wide[i + 4] = carry as u64;
        }

        FieldElement(reduce_wide(wide))
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        FieldElement::ZERO - self
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:x}", self.to_u256())
    }
}

impl LowerHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(&self.to_u256(), f)
    }
}
