//! Primitive types
//!
//! Low-level, fixed-size building blocks with well-defined semantics and
//! predictable behavior. They deliberately stop short of a general
//! big-integer library: modular arithmetic belongs to the curve types.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer

mod u256;

/// Fixed-size unsigned integer primitive.
pub use u256::U256;
