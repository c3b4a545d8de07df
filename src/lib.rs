//! Generic 2D grid geometry and traversal toolkit for puzzle-style computation
//!
//! The crate centres on an integer-generic [`Position`]/[`Area`] pair: immutable
//! coordinate values with arithmetic and lexicographic ordering, and inclusive
//! axis-aligned rectangles with lazy enumeration, row/column extraction and
//! clipped neighbour search. Around the core sit small collaborators: scalar
//! arithmetic helpers (gcd/lcm/modulo), an asynchronous cancellable line
//! reader, and delimiter-based position/vector parsers.

#![forbid(unsafe_code)]

/// Error types shared across grid, math and input operations
pub mod error;
/// Position, Area, Direction and grid indexing helpers
pub mod grid;
/// Line reading and input parsing utilities
pub mod input;
/// Scalar capability trait and integer arithmetic helpers
pub mod math;

pub use error::{GridError, Result};
pub use grid::{Area, Direction, Position};
