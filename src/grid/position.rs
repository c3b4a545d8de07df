//! Immutable 2D coordinate value with arithmetic and lexicographic ordering

use num_traits::Signed;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::grid::Direction;
use crate::math::Scalar;

/// A 2D position in a grid system
///
/// An immutable value type over any [`Scalar`] coordinate. Equality, hashing
/// and ordering are structural; the derived ordering compares x first and
/// breaks ties on y, giving the lexicographic total order over `(x, y)`.
/// Every transformation produces a new position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position<T> {
    /// The x coordinate
    pub x: T,
    /// The y coordinate
    pub y: T,
}

impl<T> Position<T> {
    /// Create a position from its coordinates
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Position<T> {
    /// The origin point (zero, zero)
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Get the destination reached by travelling a distance in a direction
    pub fn destination(self, direction: Direction, distance: T) -> Self {
        match direction {
            Direction::Down => Self::new(self.x, self.y - distance),
            Direction::Left => Self::new(self.x - distance, self.y),
            Direction::Right => Self::new(self.x + distance, self.y),
            Direction::Up => Self::new(self.x, self.y + distance),
        }
    }

    /// Get the four axis-aligned neighbours at a distance
    ///
    /// Pure offset generation with no bounds checking, in the fixed order
    /// +x, −x, +y, −y. For neighbours clipped to an area, see
    /// [`Area::neighbours`](crate::grid::Area::neighbours).
    pub fn neighbours(self, distance: T) -> [Self; 4] {
        [
            Self::new(self.x + distance, self.y),
            Self::new(self.x - distance, self.y),
            Self::new(self.x, self.y + distance),
            Self::new(self.x, self.y - distance),
        ]
    }

    /// Get the position with x and y swapped
    pub const fn transpose(self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl<T: fmt::Display> fmt::Display for Position<T> {
    /// Formats as `"(x, y)"`, an exact format relied on by golden output
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Scalar> Add for Position<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Position<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar + Signed> Neg for Position<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Mul<T> for Position<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Div<T> for Position<T> {
    type Output = Self;

    /// Element-wise division by a scalar
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero, as the underlying integer division does.
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
