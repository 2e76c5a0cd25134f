//! Shell configuration, validation, and error types.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use intmat_table::TableConfig;

// ── ShellConfig ────────────────────────────────────────────────────

/// Configuration for an [`Interpreter`](crate::Interpreter) and the table
/// it is paired with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Slot table parameters.
    pub table: TableConfig,
    /// Maximum tokens per line. Default: 50.
    pub max_tokens: usize,
    /// Maximum characters per token. Default: 25.
    pub max_token_len: usize,
    /// Directory that `write` stores into and relative `read` paths
    /// resolve against. Default: the current directory.
    pub data_dir: PathBuf,
    /// Seed for `random`. `None` draws one from the OS at startup.
    pub seed: Option<u64>,
}

impl ShellConfig {
    /// Default token limit per line.
    pub const DEFAULT_MAX_TOKENS: usize = 50;

    /// Default character limit per token.
    pub const DEFAULT_MAX_TOKEN_LEN: usize = 25;

    /// Token count of the longest command (`create <name> <rows> <cols>`).
    pub const MIN_TOKENS: usize = 4;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_tokens < Self::MIN_TOKENS {
            return Err(ConfigError::TokenLimitTooSmall {
                configured: self.max_tokens,
            });
        }
        if self.max_token_len == 0 {
            return Err(ConfigError::ZeroTokenLength);
        }
        Ok(())
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            max_token_len: Self::DEFAULT_MAX_TOKEN_LEN,
            data_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`ShellConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The table needs at least one slot.
    ZeroCapacity,
    /// The token limit cannot fit the longest command.
    TokenLimitTooSmall {
        /// The configured limit.
        configured: usize,
    },
    /// Tokens must be allowed at least one character.
    ZeroTokenLength,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "table capacity must be at least 1"),
            Self::TokenLimitTooSmall { configured } => write!(
                f,
                "token limit {configured} is below the minimum of {}",
                ShellConfig::MIN_TOKENS
            ),
            Self::ZeroTokenLength => write!(f, "token length limit must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
