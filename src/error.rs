//! Error types and result alias for grid, parsing and input operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all toolkit operations
#[derive(Debug)]
pub enum GridError {
    /// Area construction received a minimum bound greater than its maximum
    InvalidBounds {
        /// Axis on which the bounds are inverted ("x" or "y")
        axis: &'static str,
        /// Offending minimum value
        min: String,
        /// Offending maximum value
        max: String,
    },

    /// Delimited input held fewer segments than the target type requires
    MissingComponent {
        /// The input string that was being parsed
        input: String,
        /// Number of components the target type requires
        expected: usize,
        /// Number of usable segments actually found
        found: usize,
    },

    /// A segment of delimited input failed numeric parsing
    InvalidNumber {
        /// The segment that failed to parse
        segment: String,
        /// Description of the parse failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Line reading was cancelled through its cancellation token
    Cancelled {
        /// Path of the file being read when cancellation fired
        path: PathBuf,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { axis, min, max } => {
                write!(f, "Invalid {axis} bounds: min {min} exceeds max {max}")
            }
            Self::MissingComponent {
                input,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Input '{input}' has {found} usable segments, {expected} required"
                )
            }
            Self::InvalidNumber { segment, reason } => {
                write!(f, "Failed to parse segment '{segment}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Cancelled { path } => {
                write!(f, "Reading '{}' was cancelled", path.display())
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for toolkit results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an inverted-bounds error from a pair of displayable bound values
pub fn invalid_bounds(axis: &'static str, min: &impl ToString, max: &impl ToString) -> GridError {
    GridError::InvalidBounds {
        axis,
        min: min.to_string(),
        max: max.to_string(),
    }
}

/// Create an unparsable-segment error
pub fn invalid_number(segment: &str, reason: &impl ToString) -> GridError {
    GridError::InvalidNumber {
        segment: segment.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_display() {
        let error = invalid_bounds("y", &0, &-1);
        assert_eq!(error.to_string(), "Invalid y bounds: min 0 exceeds max -1");
    }

    #[test]
    fn test_file_system_error_chains_source() {
        let error = GridError::FileSystem {
            path: PathBuf::from("input.txt"),
            operation: "open",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().contains("input.txt"));
    }

    #[test]
    fn test_missing_component_display() {
        let error = GridError::MissingComponent {
            input: "4".to_string(),
            expected: 2,
            found: 1,
        };
        assert_eq!(
            error.to_string(),
            "Input '4' has 1 usable segments, 2 required"
        );
    }
}
