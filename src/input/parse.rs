//! Delimited string parsing into positions and vectors
//!
//! Input lines such as `"4, -2"` or `"1.5, 2.0, 3.5"` are split on a caller
//! supplied delimiter, trimmed, and stripped of empty segments before the
//! leading segments are parsed. Extra trailing segments are ignored; too few
//! usable segments is a parse error. Float parsing goes through Rust's
//! `FromStr`, which is locale-independent.

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, Result, invalid_number};
use crate::grid::Position;
use crate::math::Scalar;

/// Parse a delimited string into a position
///
/// The first two usable segments become x and y. Covers any [`Scalar`]
/// coordinate type, so `parse_position::<i32>` and `parse_position::<i64>`
/// both work from the same input.
///
/// # Errors
///
/// Returns [`GridError::MissingComponent`] when fewer than two usable
/// segments remain and [`GridError::InvalidNumber`] when a segment fails
/// numeric parsing.
pub fn parse_position<T>(input: &str, delimiter: &str) -> Result<Position<T>>
where
    T: Scalar + FromStr,
    T::Err: fmt::Display,
{
    let segments = required_segments(input, delimiter, 2)?;
    Ok(Position::new(
        parse_segment(segments[0])?,
        parse_segment(segments[1])?,
    ))
}

/// Parse a delimited string into a 2-component float vector
///
/// # Errors
///
/// Returns [`GridError::MissingComponent`] when fewer than two usable
/// segments remain and [`GridError::InvalidNumber`] when a segment fails
/// numeric parsing.
pub fn parse_vector2(input: &str, delimiter: &str) -> Result<[f32; 2]> {
    let segments = required_segments(input, delimiter, 2)?;
    Ok([parse_segment(segments[0])?, parse_segment(segments[1])?])
}

/// Parse a delimited string into a 3-component float vector
///
/// # Errors
///
/// Returns [`GridError::MissingComponent`] when fewer than three usable
/// segments remain and [`GridError::InvalidNumber`] when a segment fails
/// numeric parsing.
pub fn parse_vector3(input: &str, delimiter: &str) -> Result<[f32; 3]> {
    let segments = required_segments(input, delimiter, 3)?;
    Ok([
        parse_segment(segments[0])?,
        parse_segment(segments[1])?,
        parse_segment(segments[2])?,
    ])
}

/// Split, trim and filter the input, demanding a minimum segment count
fn required_segments<'a>(
    input: &'a str,
    delimiter: &str,
    expected: usize,
) -> Result<Vec<&'a str>> {
    let segments: Vec<&str> = input
        .split(delimiter)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(expected)
        .collect();
    if segments.len() < expected {
        return Err(GridError::MissingComponent {
            input: input.to_string(),
            expected,
            found: segments.len(),
        });
    }
    Ok(segments)
}

/// Parse one trimmed segment into a numeric value
fn parse_segment<T: FromStr>(segment: &str) -> Result<T>
where
    T::Err: fmt::Display,
{
    segment
        .parse()
        .map_err(|error: T::Err| invalid_number(segment, &error))
}
