//! Command interpreter for the intmat matrix tool.
//!
//! Turns one line of text into one matrix operation against a
//! [`MatrixTable`](intmat_table::MatrixTable):
//!
//! ```text
//! line ─▶ tokenize ─▶ Command::parse ─▶ Interpreter::execute ─▶ Outcome
//!          (limits)    (arity, numbers,   (lookup, ops, codec,
//!                       name lengths)      insert into table)
//! ```
//!
//! Every stage validates before the next one runs, and results that create a
//! new matrix are fully computed before they are inserted, so a rejected
//! command never changes the table.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod tokenize;

pub use command::{grammar, help_text, Command, CommandKind, CommandSpec};
pub use config::{ConfigError, ShellConfig};
pub use error::ShellError;
pub use interpreter::{Interpreter, Outcome};
pub use tokenize::{tokenize, TokenizeError, Tokens};
