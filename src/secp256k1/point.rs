//! The secp256k1 point group in affine coordinates.
//!
//! Points are either the identity ([`Point::Infinity`]) or an affine pair
//! satisfying `y² = x³ + 7`. Every constructor that accepts external data
//! checks curve membership, so the group law can assume its inputs are
//! valid and report an error instead of panicking when they are not.
//!
//! ## Group law
//!
//! Addition computes the chord (or tangent) slope `λ` and then
//!
//! ```text
//! x₃ = λ² − x₁ − x₂
//! y₃ = −(y₁ + λ·(x₃ − x₁))
//! ```
//!
//! The final negation is part of the contract: it fixes which of the two
//! roots ends up as `y₃`, and therefore the parity bit of every encoded
//! result.
//!
//! ## Scalar multiplication
//!
//! Right-to-left double-and-add over the scalar's bits, with one field
//! inversion per addition or doubling. This is explicit, unoptimised and
//! variable-time.

use super::error::Secp256k1Error;
use super::field::FieldElement;
use super::scalar::Scalar;
use crate::primitives::U256;

use std::fmt::{Display, Formatter};
use std::ops::Neg;

/// Length of a compressed point: one prefix byte and the 32-byte x.
pub const COMPRESSED_POINT_LEN: usize = 33;

const PREFIX_EVEN: u8 = 0x02;
const PREFIX_ODD: u8 = 0x03;

/// The `b` coefficient of `y² = x³ + b`.
const CURVE_B: FieldElement = FieldElement::from_u64(7);

/// The standard secp256k1 base point.
pub const GENERATOR: Point = Point::Affine {
    x: FieldElement::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    y: FieldElement::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
};

/// A point of the secp256k1 group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// The identity element.
    Infinity,

    /// A finite point; always on the curve when built through this API.
    Affine { x: FieldElement, y: FieldElement },
}

/// `x³ + 7`.
fn curve_rhs(x: FieldElement) -> FieldElement {
    x.square() * x + CURVE_B
}

impl Point {
    /// Builds a finite point from integer coordinates.
    ///
    /// # Errors
    ///
    /// [`Secp256k1Error::PointNotOnCurve`] if a coordinate is not below the
    /// field prime or the pair does not satisfy the curve equation.
    pub fn from_affine(x: U256, y: U256) -> Result<Self, Secp256k1Error> {
        let x = FieldElement::from_u256(x)
            .ok_or(Secp256k1Error::PointNotOnCurve("out of range x coordinate"))?;
        let y = FieldElement::from_u256(y)
            .ok_or(Secp256k1Error::PointNotOnCurve("out of range y coordinate"))?;

        let point = Point::Affine { x, y };

        if !point.is_on_curve() {
            return Err(Secp256k1Error::PointNotOnCurve(
                "coordinates do not satisfy the curve equation",
            ));
        }

        Ok(point)
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Checks `y² = x³ + 7`. The identity is considered on the curve.
    pub fn is_on_curve(&self) -> bool {
        match *self {
            Point::Infinity => true,
            Point::Affine { x, y } => y.square() == curve_rhs(x),
        }
    }

    /// Affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        match *self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Decodes a 33-byte compressed point.
    ///
    /// # Errors
    ///
    /// - [`Secp256k1Error::InvalidEncoding`] for a length other than 33 or a
    ///   prefix other than `0x02` / `0x03`.
    /// - [`Secp256k1Error::PointNotOnCurve`] if `x >= p` or `x³ + 7` has no
    ///   square root.
    pub fn decode(bytes: &[u8]) -> Result<Self, Secp256k1Error> {
        if bytes.len() != COMPRESSED_POINT_LEN {
            return Err(Secp256k1Error::InvalidEncoding("expected 33 bytes"));
        }

        let odd = match bytes[0] {
            PREFIX_EVEN => false,
            PREFIX_ODD => true,
            _ => return Err(Secp256k1Error::InvalidEncoding("unknown prefix byte")),
        };

        let x = U256::try_from(&bytes[1..])
            .map_err(|_| Secp256k1Error::InvalidEncoding("expected 33 bytes"))?;
        let x = FieldElement::from_u256(x)
            .ok_or(Secp256k1Error::PointNotOnCurve("out of range x coordinate"))?;

        let y_squared = curve_rhs(x);
        let mut y = y_squared.sqrt();

        if y.square() != y_squared {
            return Err(Secp256k1Error::PointNotOnCurve("invalid x coordinate"));
        }

        if y.is_odd() != odd {
            y = -y;
        }

        Ok(Point::Affine { x, y })
    }

    /// Encodes a finite point in compressed form.
    ///
    /// # Errors
    ///
    /// [`Secp256k1Error::InvalidEncoding`] for the identity, which has no
    /// compressed form.
    pub fn encode(&self) -> Result<[u8; COMPRESSED_POINT_LEN], Secp256k1Error> {
        let Point::Affine { x, y } = *self else {
            return Err(Secp256k1Error::InvalidEncoding(
                "the point at infinity has no compressed encoding",
            ));
        };

        let mut out = [0u8; COMPRESSED_POINT_LEN];
        out[0] = if y.is_odd() { PREFIX_ODD } else { PREFIX_EVEN };
        out[1..].copy_from_slice(&x.to_be_bytes());

        Ok(out)
    }

    /// The 32-byte big-endian x coordinate.
    ///
    /// # Errors
    ///
    /// [`Secp256k1Error::PointNotOnCurve`] for the identity.
    pub fn x_bytes(&self) -> Result<[u8; 32], Secp256k1Error> {
        match *self {
            Point::Infinity => Err(Secp256k1Error::PointNotOnCurve(
                "the point at infinity has no x coordinate",
            )),
            Point::Affine { x, .. } => Ok(x.to_be_bytes()),
        }
    }

    /// Group addition.
    ///
    /// # Errors
    ///
    /// [`Secp256k1Error::PointNotOnCurve`] if two operands share an x
    /// coordinate without being equal or opposite, which cannot happen for
    /// points on the curve.
    pub fn add(&self, other: &Point) -> Result<Point, Secp256k1Error> {
        let (x1, y1, x2, y2) = match (*self, *other) {
            (Point::Infinity, _) => return Ok(*other),
            (_, Point::Infinity) => return Ok(*self),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        let lambda = if x1 == x2 {
            if y1 == -y2 {
                return Ok(Point::Infinity);
            }

            if y1 != y2 {
                return Err(Secp256k1Error::PointNotOnCurve(
                    "distinct points share an x coordinate",
                ));
            }

            FieldElement::from_u64(3) * x1.square() * (y1 + y1).invert()
        } else {
            (y2 - y1) * (x2 - x1).invert()
        };

        let x3 = lambda.square() - x1 - x2;
        let y3 = y1 + lambda * (x3 - x1);

        Ok(Point::Affine { x: x3, y: -y3 })
    }

    pub fn double(&self) -> Result<Point, Secp256k1Error> {
        self.add(self)
    }

    /// Multiplies the point by `scalar` using double-and-add.
    ///
    /// Bits are consumed least significant first and the loop stops as soon
    /// as no set bits remain. The identity maps to itself for any scalar.
    pub fn scalar_mul(&self, scalar: &Scalar) -> Result<Point, Secp256k1Error> {
        let mut acc = Point::Infinity;
        let mut addend = *self;
        let mut k = scalar.to_u256();

        while !k.is_zero() {
            if k.is_odd() {
                acc = acc.add(&addend)?;
            }

            addend = addend.double()?;
            k = k >> 1;
        }

        Ok(acc)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine { x, y: -y },
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Point::Infinity => f.write_str("Point(infinity)"),
            Point::Affine { x, y } => write!(f, "Point({}, {})", x, y),
        }
    }
}
