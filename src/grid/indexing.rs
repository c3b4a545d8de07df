//! Lookup helpers for rectangular row collections
//!
//! Puzzle grids usually arrive as a list of text rows or nested vectors and
//! occasionally as a dense [`Array2`]. These helpers translate a
//! [`Position`] into the row/column lookup (row = y, column = x) without any
//! bounds pre-check of their own; an out-of-range coordinate propagates the
//! underlying collection's index panic.

use ndarray::Array2;

use crate::grid::Position;

/// Return the character at a position in a grid of text rows
///
/// Rows are indexed by byte, which is exact for the ASCII grids this toolkit
/// targets.
///
/// # Panics
///
/// Panics when the position's row or column is out of range.
pub fn char_at(grid: &[impl AsRef<str>], position: Position<usize>) -> char {
    grid[position.y].as_ref().as_bytes()[position.x] as char
}

/// Return a reference to the element at a position in a grid of rows
///
/// # Panics
///
/// Panics when the position's row or column is out of range.
pub fn element_at<T>(grid: &[Vec<T>], position: Position<usize>) -> &T {
    &grid[position.y][position.x]
}

/// Return a reference to the element at a position in a dense 2D array
///
/// # Panics
///
/// Panics when the position's row or column is out of range.
pub fn cell_at<T>(grid: &Array2<T>, position: Position<usize>) -> &T {
    &grid[[position.y, position.x]]
}
