//! Pay-to-contract style commitments to secp256k1 public keys.
//!
//! A commitment maps `P || payload` to
//!
//! ```text
//! [P + sha256(P || payload)·G]ₓ
//! ```
//!
//! where `P` is a compressed point and `G` the generator. The point is
//! part of the hashed data, so a timestamp of the input also timestamps
//! the key itself. A future discrete-log break would expose the tweak
//! relation but not let anyone re-bind the resulting x coordinate to a
//! different payload.

use super::error::Secp256k1Error;
use super::point::{COMPRESSED_POINT_LEN, GENERATOR, Point};
use super::scalar::Scalar;
use crate::hash::Sha256;

use tracing::trace;

/// Derives the tweak scalar `sha256(encode(point) || payload) mod n`.
///
/// # Errors
///
/// [`Secp256k1Error::InvalidEncoding`] if `point` is the identity.
pub fn tweak(point: &Point, payload: &[u8]) -> Result<Scalar, Secp256k1Error> {
    let mut hasher = Sha256::new();
    hasher.update(&point.encode()?);
    hasher.update(payload);

    Ok(Scalar::new(hasher.finalize()))
}

/// Commits `msg[33..]` to the compressed point in `msg[..33]` and returns
/// the x coordinate of the tweaked point.
///
/// # Errors
///
/// - [`Secp256k1Error::InputTooShort`] if `msg` holds fewer than 33 bytes.
/// - Any decoding error of the leading point.
/// - [`Secp256k1Error::PointNotOnCurve`] if the tweaked point is the
///   identity, which requires `tweak·G = −P`.
pub fn commit(msg: &[u8]) -> Result<[u8; 32], Secp256k1Error> {
    if msg.len() < COMPRESSED_POINT_LEN {
        return Err(Secp256k1Error::InputTooShort {
            expected: COMPRESSED_POINT_LEN,
            actual: msg.len(),
        });
    }

    let (encoded, payload) = msg.split_at(COMPRESSED_POINT_LEN);

    let point = Point::decode(encoded)?;
    let tweak = tweak(&point, payload)?;
    let tweaked = point.add(&GENERATOR.scalar_mul(&tweak)?)?;
    let x = tweaked.x_bytes()?;

    trace!(payload_len = payload.len(), "computed secp256k1 commitment");

    Ok(x)
}
