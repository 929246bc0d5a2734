//! secp256k1 public-key commitments for timestamp proofs
//!
//! This crate implements the one non-trivial cryptographic operation of a
//! timestamp proof verifier: binding a message to an existing secp256k1
//! public key by tweaking the key with a hash of the key and the message.
//!
//! The focus is on **clarity, predictability, and auditability**. The curve
//! arithmetic is explicit and unoptimised; it works only on public data and
//! makes no constant-time claims.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size integer primitives. `U256` carries coordinates, scalars
//!   and digests in big-endian form.
//!
//! - `hash`
//!   A pure-Rust SHA-256, used to derive commitment tweaks.
//!
//! - `secp256k1`
//!   Field arithmetic modulo `p`, scalars modulo `n`, the point group with
//!   its 33-byte compressed encoding, and the commitment itself:
//!
//!   ```text
//!   P || payload  ->  [P + sha256(P || payload)·G]ₓ
//!   ```
//!
//! - `op`
//!   The operation contract seen by a timestamp verifier: the one-byte tag
//!   (`0x09`), the symbolic name (`secp256k1commitment`), message and
//!   result length limits, and an explicit tag registry.
//!
//! # Design goals
//!
//! - Pure functions over immutable values; no shared mutable state
//! - Malformed input is reported as an error, never a panic
//! - Stable, bit-exact byte formats
//!
//! This crate is not a general-purpose elliptic-curve library: there is no
//! signing and no key generation.

pub mod hash;
pub mod op;
pub mod primitives;
pub mod secp256k1;
