//! Mathematical utilities for grid computation
//!
//! This module contains the numeric foundation of the toolkit:
//! - The [`Scalar`](scalar::Scalar) capability trait coordinate types must satisfy
//! - Integer arithmetic helpers (gcd, lcm, true modulo, ordered min/max)

/// Integer arithmetic helpers over scalar values
pub mod arithmetic;
/// Numeric capability trait for coordinate scalars
pub mod scalar;

pub use scalar::Scalar;
