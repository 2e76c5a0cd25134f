//! Table-specific error types.

use std::error::Error;
use std::fmt;

use intmat_core::ErrorKind;

/// Errors that can occur during table construction or lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one slot.
    ZeroCapacity,
    /// The slot array could not be allocated.
    AllocationFailed {
        /// Requested slot count.
        capacity: usize,
    },
    /// No slot holds a matrix with this name.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl TableError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroCapacity => ErrorKind::Validation,
            Self::AllocationFailed { .. } => ErrorKind::Allocation,
            Self::NotFound { .. } => ErrorKind::Lookup,
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "table capacity must be at least 1"),
            Self::AllocationFailed { capacity } => {
                write!(f, "failed to allocate a table of {capacity} slots")
            }
            Self::NotFound { name } => write!(f, "Matrix ({name}) doesn't exist"),
        }
    }
}

impl Error for TableError {}
