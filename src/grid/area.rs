//! Inclusive axis-aligned rectangle of grid positions
//!
//! An [`Area`] is defined by validated min/max bounds on both axes and owns
//! no positions; enumeration, row and column extraction generate them on
//! demand as lazy, restartable sequences. All queries are pure and the value
//! is immutable after construction.

use crate::error::{Result, invalid_bounds};
use crate::grid::Position;
use crate::math::Scalar;

/// An inclusive rectangle `[min_x, max_x] × [min_y, max_y]` of positions
///
/// Bounds are validated once at construction: a minimum above its maximum is
/// a construction error, never silently swapped or clamped. Degenerate areas
/// with equal bounds are valid and denote a single point. Corner positions
/// are computed on access rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Area<T> {
    max_x: T,
    max_y: T,
    min_x: T,
    min_y: T,
}

impl<T: Scalar> Area<T> {
    /// Create an area from its inclusive bounds
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidBounds`](crate::GridError::InvalidBounds)
    /// when `min_x > max_x` or `min_y > max_y`.
    pub fn new(max_x: T, max_y: T, min_x: T, min_y: T) -> Result<Self> {
        if min_x > max_x {
            return Err(invalid_bounds("x", &min_x, &max_x));
        }
        if min_y > max_y {
            return Err(invalid_bounds("y", &min_y, &max_y));
        }
        Ok(Self {
            max_x,
            max_y,
            min_x,
            min_y,
        })
    }

    /// Create an area spanning from the origin to the given maxima
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidBounds`](crate::GridError::InvalidBounds)
    /// when either maximum is negative.
    pub fn from_origin(max_x: T, max_y: T) -> Result<Self> {
        Self::new(max_x, max_y, T::zero(), T::zero())
    }

    /// Get the maximum x bound
    pub const fn max_x(&self) -> T {
        self.max_x
    }

    /// Get the maximum y bound
    pub const fn max_y(&self) -> T {
        self.max_y
    }

    /// Get the minimum x bound
    pub const fn min_x(&self) -> T {
        self.min_x
    }

    /// Get the minimum y bound
    pub const fn min_y(&self) -> T {
        self.min_y
    }

    /// Get the bottom left corner position
    pub const fn bottom_left(&self) -> Position<T> {
        Position::new(self.min_x, self.min_y)
    }

    /// Get the bottom right corner position
    pub const fn bottom_right(&self) -> Position<T> {
        Position::new(self.max_x, self.min_y)
    }

    /// Get the top left corner position
    pub const fn top_left(&self) -> Position<T> {
        Position::new(self.min_x, self.max_y)
    }

    /// Get the top right corner position
    pub const fn top_right(&self) -> Position<T> {
        Position::new(self.max_x, self.max_y)
    }

    /// Enumerate every position in the area
    ///
    /// The sequence is lazy, finite and x-major: the outer sweep runs x from
    /// `min_x` to `max_x`, the inner sweep runs y from `min_y` to `max_y`.
    /// Each call produces an independent iterator with fresh state.
    pub fn positions(&self) -> Positions<T> {
        Positions::spanning(self.bottom_left(), self.min_y, self.max_x, self.max_y)
    }

    /// Enumerate the row at a fixed y, in increasing x order
    ///
    /// Empty when `y` lies outside the vertical bounds.
    pub fn row(&self, y: T) -> Positions<T> {
        if y < self.min_y || y > self.max_y {
            return Positions::exhausted();
        }
        Positions::spanning(Position::new(self.min_x, y), y, self.max_x, y)
    }

    /// Enumerate the column at a fixed x, in increasing y order
    ///
    /// Empty when `x` lies outside the horizontal bounds.
    pub fn column(&self, x: T) -> Positions<T> {
        if x < self.min_x || x > self.max_x {
            return Positions::exhausted();
        }
        Positions::spanning(Position::new(x, self.min_y), self.min_y, x, self.max_y)
    }

    /// Get the neighbour positions of a center that fall inside this area
    ///
    /// Each of the four axis-aligned offsets at `distance` is tested
    /// independently, in the fixed order +y, −y, +x, −x, and admitted only
    /// when the offset coordinate stays within its bound and the center's
    /// perpendicular coordinate lies within the area. The result holds
    /// between zero and four positions.
    ///
    /// The perpendicular checks never test the center's own coordinate on
    /// the offset axis, so a center outside the area can still produce
    /// neighbours when its perpendicular coordinate is in range.
    pub fn neighbours(&self, center: Position<T>, distance: T) -> Vec<Position<T>> {
        let mut result = Vec::with_capacity(4);
        let x_in_range = center.x >= self.min_x && center.x <= self.max_x;
        let y_in_range = center.y >= self.min_y && center.y <= self.max_y;
        if center.y + distance <= self.max_y && x_in_range {
            result.push(Position::new(center.x, center.y + distance));
        }
        if center.y - distance >= self.min_y && x_in_range {
            result.push(Position::new(center.x, center.y - distance));
        }
        if center.x + distance <= self.max_x && y_in_range {
            result.push(Position::new(center.x + distance, center.y));
        }
        if center.x - distance >= self.min_x && y_in_range {
            result.push(Position::new(center.x - distance, center.y));
        }
        result
    }

    /// Determine whether this area contains a position
    ///
    /// Both bounds are inclusive on both axes.
    pub fn contains(&self, position: Position<T>) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.y >= self.min_y
            && position.y <= self.max_y
    }

    /// Determine whether this area fully encloses another area
    pub fn encloses(&self, other: &Self) -> bool {
        self.max_x >= other.max_x
            && self.min_x <= other.min_x
            && self.max_y >= other.max_y
            && self.min_y <= other.min_y
    }

    /// Determine whether this area overlaps another area
    ///
    /// Bounds are inclusive, so rectangles touching on an edge or a corner
    /// intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}

impl<T: Scalar> IntoIterator for Area<T> {
    type Item = Position<T>;
    type IntoIter = Positions<T>;

    fn into_iter(self) -> Positions<T> {
        self.positions()
    }
}

impl<T: Scalar> IntoIterator for &Area<T> {
    type Item = Position<T>;
    type IntoIter = Positions<T>;

    fn into_iter(self) -> Positions<T> {
        self.positions()
    }
}

/// Lazy x-major iterator over the positions of an [`Area`]
///
/// Holds its own cursor, so independent enumerations of the same area never
/// share state. Bounds are compared before the cursor advances, keeping the
/// iteration overflow-free even when an area touches the scalar's extrema.
#[derive(Debug, Clone)]
pub struct Positions<T> {
    cursor: Position<T>,
    min_y: T,
    max_x: T,
    max_y: T,
    exhausted: bool,
}

impl<T: Scalar> Positions<T> {
    const fn spanning(start: Position<T>, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            cursor: start,
            min_y,
            max_x,
            max_y,
            exhausted: false,
        }
    }

    fn exhausted() -> Self {
        Self {
            cursor: Position::origin(),
            min_y: T::zero(),
            max_x: T::zero(),
            max_y: T::zero(),
            exhausted: true,
        }
    }
}

impl<T: Scalar> Iterator for Positions<T> {
    type Item = Position<T>;

    fn next(&mut self) -> Option<Position<T>> {
        if self.exhausted {
            return None;
        }
        let current = self.cursor;
        if self.cursor.y < self.max_y {
            self.cursor.y = self.cursor.y + T::one();
        } else if self.cursor.x < self.max_x {
            self.cursor.x = self.cursor.x + T::one();
            self.cursor.y = self.min_y;
        } else {
            self.exhausted = true;
        }
        Some(current)
    }
}

impl<T: Scalar> std::iter::FusedIterator for Positions<T> {}
