//! Spatial core: positions, areas, directions and grid indexing
//!
//! This module contains the grid-related functionality:
//! - Immutable generic coordinate values with arithmetic and ordering
//! - Inclusive axis-aligned rectangles with lazy enumeration
//! - Cardinal directions for grid traversal
//! - Indexing helpers for rectangular row collections

/// Inclusive axis-aligned rectangle of positions
pub mod area;
/// Cardinal directions for grid traversal
pub mod direction;
/// Lookup helpers for rectangular row collections
pub mod indexing;
/// Immutable 2D coordinate value
pub mod position;

pub use area::{Area, Positions};
pub use direction::Direction;
pub use position::Position;
