//! intmat: named `u32` matrices, a bounded slot table, and a line-oriented
//! command shell.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! intmat sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use intmat::prelude::*;
//!
//! let config = ShellConfig {
//!     seed: Some(42),
//!     ..ShellConfig::default()
//! };
//! let mut table = MatrixTable::new(config.table.clone()).unwrap();
//! let mut shell = Interpreter::new(config).unwrap();
//!
//! shell.execute_line(&mut table, "create A 2 2").unwrap();
//! shell.execute_line(&mut table, "random A 0 9").unwrap();
//! shell.execute_line(&mut table, "duplicate A B").unwrap();
//!
//! let outcome = shell.execute_line(&mut table, "equal A B").unwrap();
//! assert_eq!(outcome.to_string(), "SAME DATA IN BOTH");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `intmat-core` | `Matrix`, names, operations, error kinds |
//! | [`table`] | `intmat-table` | Fixed-capacity slot table |
//! | [`codec`] | `intmat-codec` | Binary file format |
//! | [`shell`] | `intmat-shell` | Tokenizer, command grammar, interpreter |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Matrix entity, names, and elementwise operations (`intmat-core`).
pub use intmat_core as types;

/// Fixed-capacity slot table with round-robin eviction (`intmat-table`).
pub use intmat_table as table;

/// Binary encode/decode and file persistence (`intmat-codec`).
///
/// Files written by [`codec::write_matrix_file`] are read back unchanged by
/// [`codec::read_matrix_file`].
pub use intmat_codec as codec;

/// Command tokenizer, grammar, and interpreter (`intmat-shell`).
pub use intmat_shell as shell;

/// Common imports for typical intmat usage.
///
/// ```rust
/// use intmat::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use intmat_core::ops::{self, ShiftDirection};
    pub use intmat_core::{ErrorKind, Matrix, MatrixError, MatrixName};

    // Table
    pub use intmat_table::{MatrixTable, TableConfig, TableError};

    // Codec
    pub use intmat_codec::{read_matrix_file, write_matrix_file, CodecError};

    // Shell
    pub use intmat_shell::{Command, Interpreter, Outcome, ShellConfig, ShellError};
}
