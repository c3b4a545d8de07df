//! Numeric capability trait for coordinate scalars
//!
//! Positions and areas are generic over any primitive integer. Rather than
//! scattering `num_traits` bounds across every impl, the requirements are
//! collected into one capability trait with a blanket impl, so `i32`, `i64`,
//! `usize` and friends all qualify automatically.

use num_traits::PrimInt;
use std::fmt;

/// Capability required of a coordinate scalar
///
/// Supplies element-wise arithmetic (addition, subtraction, multiplication,
/// division, remainder), total ordering, and a zero/one via
/// [`PrimInt`]. `Default` doubles as the zero used by origin positions and
/// origin-anchored areas. Division by a zero scalar is an arithmetic fault
/// delegated to the underlying integer type.
///
/// Operations that only make sense for signed values (unary negation,
/// gcd/lcm, true modulo) take an additional [`num_traits::Signed`] bound at
/// their own signatures, so unsigned scalars such as `usize` remain valid
/// coordinates for indexing use.
pub trait Scalar: PrimInt + Default + fmt::Debug + fmt::Display {}

impl<T> Scalar for T where T: PrimInt + Default + fmt::Debug + fmt::Display {}
