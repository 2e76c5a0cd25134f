//! Error types for matrix construction and elementwise operations.

use std::error::Error;
use std::fmt;

/// Coarse classification shared by every error in the workspace.
///
/// Subsystem errors keep their own detailed variants; `kind()` maps each of
/// them onto one of these buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed argument, oversized name, wrong arity.
    Validation,
    /// An operand name did not resolve in the table.
    Lookup,
    /// Open, read, write, or close failure.
    Io,
    /// A buffer could not be allocated.
    Allocation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation error"),
            Self::Lookup => write!(f, "lookup error"),
            Self::Io => write!(f, "I/O error"),
            Self::Allocation => write!(f, "allocation error"),
        }
    }
}

/// Errors from matrix construction and [`ops`](crate::ops).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// The name is empty, contains whitespace or NUL, or is too long.
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// A data buffer does not hold exactly `rows * cols` elements.
    LengthMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// Operand shapes are incompatible.
    DimensionMismatch {
        /// `(rows, cols)` of the left operand.
        left: (u32, u32),
        /// `(rows, cols)` of the right operand.
        right: (u32, u32),
    },
    /// The operation requires at least one row and one column.
    EmptyMatrix {
        /// Name of the offending matrix.
        name: String,
    },
    /// `hi < lo` for a random fill.
    InvalidRange {
        /// Lower bound.
        lo: u32,
        /// Upper bound.
        hi: u32,
    },
    /// A duplicate did not compare equal to its source after the copy.
    DuplicateVerifyFailed {
        /// Source matrix name.
        src: String,
        /// Destination matrix name.
        dest: String,
    },
    /// The cell buffer could not be allocated (or `rows * cols` overflowed).
    AllocationFailed {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
}

impl MatrixError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailed { .. } => ErrorKind::Allocation,
            _ => ErrorKind::Validation,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { name, reason } => {
                write!(f, "invalid matrix name {name:?}: {reason}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "data length {actual} does not match rows*cols = {expected}")
            }
            Self::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "dimension mismatch: ({},{}) vs ({},{})",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::EmptyMatrix { name } => {
                write!(f, "matrix ({name}) has zero rows or columns")
            }
            Self::InvalidRange { lo, hi } => {
                write!(f, "invalid range: upper bound {hi} is below lower bound {lo}")
            }
            Self::DuplicateVerifyFailed { src, dest } => {
                write!(f, "duplicate of ({src}) into ({dest}) did not verify")
            }
            Self::AllocationFailed { rows, cols } => {
                write!(f, "failed to allocate a {rows}x{cols} matrix")
            }
        }
    }
}

impl Error for MatrixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_is_its_own_kind() {
        let err = MatrixError::AllocationFailed { rows: 1, cols: 1 };
        assert_eq!(err.kind(), ErrorKind::Allocation);
        let err = MatrixError::InvalidRange { lo: 5, hi: 1 };
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn display_names_both_shapes() {
        let err = MatrixError::DimensionMismatch {
            left: (2, 2),
            right: (3, 3),
        };
        assert_eq!(err.to_string(), "dimension mismatch: (2,2) vs (3,3)");
    }
}
