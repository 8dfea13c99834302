//! Error types for matriz operations.
//!
//! Every fallible operation in the crate reports through [`MatrizError`];
//! the [`Result`] alias is used throughout the public API.

use std::fmt;

/// Main error type for matriz operations.
///
/// Covers the three ways a caller can hand the library bad input —
/// out-of-range indices, incompatible shapes, and geometrically degenerate
/// operands — plus the I/O and parse failures of grid-file loading.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Element access or row/column-operation index outside valid bounds.
    IndexOutOfRange {
        /// Offending index description, e.g. `"(5,5)"` or `"7"`.
        index: String,
        /// Size of the container the index was checked against.
        size: String,
    },

    /// Operands have incompatible shapes for the requested operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation is undefined for the given operand values or dimensions.
    DegenerateOperation {
        /// What made the operation degenerate
        reason: String,
    },

    /// I/O error while loading a grid file.
    Io(std::io::Error),

    /// Malformed line in a grid file.
    Parse {
        /// 1-based line number within the file
        line: usize,
        /// Error description
        message: String,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for size {size}")
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            MatrizError::DegenerateOperation { reason } => {
                write!(f, "degenerate operation: {reason}")
            }
            MatrizError::Io(e) => write!(f, "I/O error: {e}"),
            MatrizError::Parse { line, message } => {
                write!(f, "parse error at line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for MatrizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrizError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MatrizError {
    fn from(err: std::io::Error) -> Self {
        MatrizError::Io(err)
    }
}

impl MatrizError {
    /// Create an index error for 1-D element access.
    #[must_use]
    pub fn index_1d(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: format!("{index}"),
            size: format!("{len}"),
        }
    }

    /// Create an index error for 2-D element or row/column access.
    #[must_use]
    pub fn index_2d(index: (usize, usize), shape: (usize, usize)) -> Self {
        Self::IndexOutOfRange {
            index: format!("({},{})", index.0, index.1),
            size: format!("({},{})", shape.0, shape.1),
        }
    }

    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a degenerate operation error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateOperation {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let err = MatrizError::index_2d((5, 5), (3, 3));
        let msg = err.to_string();
        assert!(msg.contains("(5,5)"));
        assert!(msg.contains("(3,3)"));
        assert!(msg.contains("out of range"));
    }

    #[test]
    fn test_index_1d_display() {
        let err = MatrizError::index_1d(7, 3);
        let msg = err.to_string();
        assert!(msg.contains("index 7"));
        assert!(msg.contains("size 3"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrizError::dimension_mismatch("2x2", "3x3");
        let msg = err.to_string();
        assert!(msg.contains("dimension mismatch"));
        assert!(msg.contains("2x2"));
        assert!(msg.contains("3x3"));
    }

    #[test]
    fn test_degenerate_display() {
        let err = MatrizError::degenerate("cannot normalize the zero vector");
        let msg = err.to_string();
        assert!(msg.contains("degenerate operation"));
        assert!(msg.contains("zero vector"));
    }

    #[test]
    fn test_parse_display() {
        let err = MatrizError::Parse {
            line: 3,
            message: "invalid number \"abc\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MatrizError = io_err.into();
        assert!(matches!(err, MatrizError::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_non_io_source_is_none() {
        use std::error::Error;
        let err = MatrizError::degenerate("x");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MatrizError::dimension_mismatch("3", "2");
        let debug = format!("{err:?}");
        assert!(debug.contains("DimensionMismatch"));
    }
}
