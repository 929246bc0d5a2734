//! secp256k1 arithmetic and key commitments.
//!
//! The module is layered bottom-up:
//!
//! - [`field`]
//!   Arithmetic modulo the field prime `p`, including inversion and
//!   square roots by exponentiation.
//!
//! - [`scalar`]
//!   Integers modulo the group order `n`.
//!
//! - [`point`]
//!   The point group: compressed encoding, the group law and scalar
//!   multiplication.
//!
//! - [`commitment`]
//!   The tweak-and-add commitment that binds a message to a public key.
//!
//! ## Security scope
//!
//! This is not a general-purpose curve library. There is no signing, no
//! key generation and no constant-time guarantee: every operation works on
//! public data. All values are immutable and every function is pure, so
//! calls can run in parallel without coordination.

pub mod commitment;
pub mod error;
pub mod field;
pub mod point;
pub mod scalar;

pub use commitment::{commit, tweak};
pub use error::Secp256k1Error;
pub use field::{FIELD_PRIME, FieldElement};
pub use point::{COMPRESSED_POINT_LEN, GENERATOR, Point};
pub use scalar::{CURVE_ORDER, Scalar};
