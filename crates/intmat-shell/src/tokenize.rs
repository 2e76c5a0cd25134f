//! Whitespace tokenizer with bounded token count and length.

use std::error::Error;
use std::fmt;

use smallvec::SmallVec;

/// Tokens of one line. Four inline slots cover every command.
pub type Tokens = SmallVec<[String; 4]>;

/// Why a line could not be tokenized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenizeError {
    /// The line is empty or only whitespace.
    Empty,
    /// The line has more tokens than allowed.
    TooManyTokens {
        /// The configured limit.
        max: usize,
    },
    /// A token is longer than allowed.
    TokenTooLong {
        /// The offending token.
        token: String,
        /// The configured limit in characters.
        max: usize,
    },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::TooManyTokens { max } => write!(f, "more than {max} tokens"),
            Self::TokenTooLong { token, max } => {
                write!(f, "token {token:?} is longer than {max} characters")
            }
        }
    }
}

impl Error for TokenizeError {}

/// Split `line` on whitespace.
///
/// Fails without producing any tokens if the line is blank, has more than
/// `max_tokens` tokens, or contains a token longer than `max_token_len`
/// characters. There is no quoting or escaping.
///
/// # Examples
///
/// ```
/// use intmat_shell::tokenize;
///
/// let tokens = tokenize("  create A 2\t3\n", 50, 25).unwrap();
/// assert_eq!(tokens.as_slice(), ["create", "A", "2", "3"]);
/// assert!(tokenize("   ", 50, 25).is_err());
/// ```
pub fn tokenize(line: &str, max_tokens: usize, max_token_len: usize) -> Result<Tokens, TokenizeError> {
    let mut tokens = Tokens::new();
    for token in line.split_whitespace() {
        if tokens.len() == max_tokens {
            return Err(TokenizeError::TooManyTokens { max: max_tokens });
        }
        if token.chars().count() > max_token_len {
            return Err(TokenizeError::TokenTooLong {
                token: token.to_string(),
                max: max_token_len,
            });
        }
        tokens.push(token.to_string());
    }
    if tokens.is_empty() {
        return Err(TokenizeError::Empty);
    }
    Ok(tokens)
}
