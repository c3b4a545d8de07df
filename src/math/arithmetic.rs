//! Integer arithmetic helpers over scalar values
//!
//! Small stateless building blocks for cycle detection and coordinate
//! normalization: greatest common divisor, least common multiple (with
//! left-to-right slice reductions), ordered min/max, and a true modulo that
//! stays non-negative for negative operands.

use num_traits::Signed;

use crate::math::Scalar;

/// Compute the greatest common divisor of two numbers
///
/// Euclid's algorithm on absolute values; the result is never negative and
/// `gcd(0, 0)` is zero.
pub fn gcd<T: Scalar + Signed>(a: T, b: T) -> T {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Reduce a slice of numbers to their greatest common divisor
///
/// Reduces left to right; an empty slice yields zero and a single element is
/// returned unchanged.
pub fn gcd_all<T: Scalar + Signed>(numbers: &[T]) -> T {
    reduce(numbers, gcd)
}

/// Compute the least common multiple of two numbers
///
/// Divides by the gcd before multiplying to keep intermediates small. Both
/// operands are taken by absolute value.
///
/// # Panics
///
/// Panics on `lcm(0, 0)`, where the gcd divisor is zero.
pub fn lcm<T: Scalar + Signed>(a: T, b: T) -> T {
    let a = a.abs();
    let b = b.abs();
    a / gcd(a, b) * b
}

/// Reduce a slice of numbers to their least common multiple
///
/// Reduces left to right; an empty slice yields zero and a single element is
/// returned unchanged.
pub fn lcm_all<T: Scalar + Signed>(numbers: &[T]) -> T {
    reduce(numbers, lcm)
}

/// Order a pair of values as (minimum, maximum)
pub fn min_max<T: Scalar>(a: T, b: T) -> (T, T) {
    if a < b { (a, b) } else { (b, a) }
}

/// Compute the true modulo of two numbers
///
/// Unlike the remainder operator, the result is non-negative for negative
/// operands: `modulo(-1, 5)` is 4.
///
/// # Panics
///
/// Panics when `b` is zero, as the underlying remainder operation does.
pub fn modulo<T: Scalar + Signed>(a: T, b: T) -> T {
    (a % b + b) % b
}

/// Fold a slice with a binary operation, left to right
fn reduce<T: Scalar>(values: &[T], operation: impl Fn(T, T) -> T) -> T {
    match values.split_first() {
        None => T::zero(),
        Some((&first, [])) => first,
        Some((&first, rest)) => rest.iter().fold(first, |acc, &value| operation(acc, value)),
    }
}
