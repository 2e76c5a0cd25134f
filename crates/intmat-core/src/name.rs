//! Validated matrix names.

use std::fmt;

use crate::error::MatrixError;

/// Maximum stored name length in bytes, counting the NUL terminator the
/// persisted format writes after every name.
pub const MAX_NAME_LEN: usize = 50;

/// A matrix name that is guaranteed to fit the persisted format.
///
/// Names are non-empty, contain no whitespace, NUL bytes or path
/// separators, are not `.` or `..`, and satisfy `len + 1 <= MAX_NAME_LEN`.
///
/// # Examples
///
/// ```
/// use intmat_core::MatrixName;
///
/// let name = MatrixName::new("temp_mat").unwrap();
/// assert_eq!(name.as_str(), "temp_mat");
/// assert_eq!(name.stored_len(), 9);
///
/// assert!(MatrixName::new("").is_err());
/// assert!(MatrixName::new(&"x".repeat(50)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatrixName(String);

impl MatrixName {
    /// Validate and wrap a name.
    pub fn new(name: &str) -> Result<Self, MatrixError> {
        let reject = |reason| MatrixError::InvalidName {
            name: name.to_string(),
            reason,
        };
        if name.is_empty() {
            return Err(reject("empty"));
        }
        if name.len() + 1 > MAX_NAME_LEN {
            return Err(reject("longer than 49 bytes"));
        }
        if name.contains('\0') {
            return Err(reject("contains a NUL byte"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(reject("contains whitespace"));
        }
        // `write` uses the name as a file name inside the data directory.
        if name.contains(['/', '\\']) {
            return Err(reject("contains a path separator"));
        }
        if name == "." || name == ".." {
            return Err(reject("is a directory reference"));
        }
        Ok(Self(name.to_string()))
    }

    /// The name as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length on disk: the text plus its NUL terminator.
    pub fn stored_len(&self) -> usize {
        self.0.len() + 1
    }
}

impl fmt::Display for MatrixName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MatrixName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for MatrixName {
    type Error = MatrixError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
