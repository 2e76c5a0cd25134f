//! Error types for matrix encoding, decoding, and file persistence.

use std::fmt;
use std::io;

use intmat_core::{ErrorKind, MatrixError};

use crate::codec::Field;

/// Why an I/O operation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IoCause {
    /// The process lacks permission for the file.
    PermissionDenied,
    /// The file or address is in use by someone else.
    Busy,
    /// The underlying descriptor was invalid.
    BadHandle,
    /// The file already exists.
    AlreadyExists,
    /// The file does not exist.
    NotFound,
    /// The stream ended early.
    UnexpectedEof,
    /// Anything else.
    Other,
}

impl IoCause {
    /// Classify an `io::Error`.
    pub fn of(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::ResourceBusy | io::ErrorKind::AddrInUse => Self::Busy,
            io::ErrorKind::AlreadyExists => Self::AlreadyExists,
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::UnexpectedEof => Self::UnexpectedEof,
            _ if is_bad_descriptor(err) => Self::BadHandle,
            _ => Self::Other,
        }
    }
}

#[cfg(unix)]
fn is_bad_descriptor(err: &io::Error) -> bool {
    // EBADF
    err.raw_os_error() == Some(9)
}

#[cfg(not(unix))]
fn is_bad_descriptor(_err: &io::Error) -> bool {
    false
}

impl fmt::Display for IoCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PermissionDenied => "do not have access to file",
            Self::Busy => "file already in use",
            Self::BadHandle => "bad file descriptor",
            Self::AlreadyExists => "file exists",
            Self::NotFound => "no such file",
            Self::UnexpectedEof => "unexpected end of file",
            Self::Other => "other",
        };
        f.write_str(text)
    }
}

/// Errors that can occur while encoding, decoding, or persisting a matrix.
#[derive(Debug)]
pub enum CodecError {
    /// An open, read, write, or sync call failed.
    Io {
        /// Classified cause.
        cause: IoCause,
        /// The original error.
        source: io::Error,
    },
    /// The stream ended before `field` was fully read.
    Truncated {
        /// The field being read.
        field: Field,
    },
    /// The encoded name is empty, oversized, unterminated, or not UTF-8.
    MalformedName {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The decoded fields do not form a valid matrix, or its buffer could
    /// not be allocated.
    Matrix(MatrixError),
}

impl CodecError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::Truncated { .. } => ErrorKind::Io,
            Self::MalformedName { .. } => ErrorKind::Validation,
            Self::Matrix(e) => e.kind(),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { cause, source } => write!(f, "I/O error ({cause}): {source}"),
            Self::Truncated { field } => write!(f, "failed to read matrix {field}"),
            Self::MalformedName { detail } => write!(f, "malformed matrix name: {detail}"),
            Self::Matrix(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Matrix(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io {
            cause: IoCause::of(&e),
            source: e,
        }
    }
}

impl From<MatrixError> for CodecError {
    fn from(e: MatrixError) -> Self {
        Self::Matrix(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn causes_follow_io_kinds() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(IoCause::of(&denied), IoCause::PermissionDenied);
        let exists = io::Error::from(io::ErrorKind::AlreadyExists);
        assert_eq!(IoCause::of(&exists), IoCause::AlreadyExists);
        let busy = io::Error::from(io::ErrorKind::AddrInUse);
        assert_eq!(IoCause::of(&busy), IoCause::Busy);
        let other = io::Error::other("boom");
        assert_eq!(IoCause::of(&other), IoCause::Other);
    }

    #[cfg(unix)]
    #[test]
    fn ebadf_is_a_bad_handle() {
        let err = io::Error::from_raw_os_error(9);
        assert_eq!(IoCause::of(&err), IoCause::BadHandle);
    }

    #[test]
    fn kinds() {
        let io_err = CodecError::from(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(io_err.kind(), ErrorKind::Io);
        let trunc = CodecError::Truncated { field: Field::Rows };
        assert_eq!(trunc.kind(), ErrorKind::Io);
        let alloc = CodecError::Matrix(MatrixError::AllocationFailed { rows: 1, cols: 1 });
        assert_eq!(alloc.kind(), ErrorKind::Allocation);
    }
}
