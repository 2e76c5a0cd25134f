//! Command-level error type.

use std::error::Error;
use std::fmt;

use intmat_codec::CodecError;
use intmat_core::{ErrorKind, MatrixError};
use intmat_table::TableError;

use crate::command::CommandKind;
use crate::tokenize::TokenizeError;

/// Why a command line was rejected or failed.
///
/// Whatever the variant, the table is left exactly as it was before the
/// command.
#[derive(Debug)]
pub enum ShellError {
    /// The line could not be tokenized.
    Tokenize(TokenizeError),
    /// The first token is not a command name.
    UnknownCommand {
        /// The unrecognised name.
        name: String,
    },
    /// The command got the wrong number of arguments.
    Arity {
        /// The command.
        command: CommandKind,
        /// Arguments it takes.
        expected: usize,
        /// Arguments it got.
        found: usize,
    },
    /// A numeric argument is not a decimal `u32`.
    InvalidNumber {
        /// Which argument.
        arg: &'static str,
        /// The token as typed.
        token: String,
    },
    /// Name lookup failed.
    Table(TableError),
    /// Name validation or a matrix operation failed.
    Matrix(MatrixError),
    /// Reading or writing a matrix file failed.
    Codec(CodecError),
}

impl ShellError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Tokenize(_)
            | Self::UnknownCommand { .. }
            | Self::Arity { .. }
            | Self::InvalidNumber { .. } => ErrorKind::Validation,
            Self::Table(e) => e.kind(),
            Self::Matrix(e) => e.kind(),
            Self::Codec(e) => e.kind(),
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokenize(e) => write!(f, "Failed at parsing command: {e}"),
            Self::UnknownCommand { name } => {
                write!(f, "Not a command in this application: {name}")
            }
            Self::Arity {
                command,
                expected,
                found,
            } => write!(
                f,
                "{command} takes {expected} argument(s), got {found} (usage: {})",
                command.spec().usage
            ),
            Self::InvalidNumber { arg, token } => {
                write!(f, "{arg} must be an unsigned 32-bit integer, got {token:?}")
            }
            Self::Table(e) => write!(f, "{e}"),
            Self::Matrix(e) => write!(f, "{e}"),
            Self::Codec(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Tokenize(e) => Some(e),
            Self::Table(e) => Some(e),
            Self::Matrix(e) => Some(e),
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TokenizeError> for ShellError {
    fn from(e: TokenizeError) -> Self {
        Self::Tokenize(e)
    }
}

impl From<TableError> for ShellError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

impl From<MatrixError> for ShellError {
    fn from(e: MatrixError) -> Self {
        Self::Matrix(e)
    }
}

impl From<CodecError> for ShellError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}
