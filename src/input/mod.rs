//! Line reading and input parsing utilities
//!
//! This module contains the input-facing collaborators of the toolkit:
//! - Asynchronous, cancellable, lazy line reading from a file
//! - Delimiter-based parsing of positions and float vectors

/// Delimited string parsing into positions and vectors
pub mod parse;
/// Asynchronous cancellable line reading
pub mod reader;

pub use parse::{parse_position, parse_vector2, parse_vector3};
pub use reader::LineReader;
