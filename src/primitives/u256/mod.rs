//! 256-bit unsigned integer primitive
//!
//! Split into the value type itself (`core`), its operator impls (`ops`)
//! and its explicit conversions (`conv`).

mod conv;
mod core;
mod ops;

pub use self::core::U256;
