//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust implementation, used to
//! derive commitment tweaks.

pub mod sha256;

/// Re-export of the SHA-256 hasher and convenience function.
pub use sha256::core::{Sha256, sha256};
