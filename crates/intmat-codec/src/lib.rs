//! Binary persistence for intmat matrices.
//!
//! Encodes a single [`Matrix`](intmat_core::Matrix) into one contiguous
//! buffer and decodes it back. The format is fixed and shared with other
//! implementations, so output must be byte-identical for the same matrix.
//!
//! # Architecture
//!
//! - [`encode`] / [`encode_into`] produce the byte image of a matrix
//! - [`decode`] / [`decode_from`] parse it from a slice or any `Read` source
//! - [`write_matrix_file`] / [`read_matrix_file`] persist to the filesystem
//!
//! # Format
//!
//! ```text
//! [u32 name_len] [name bytes + NUL] [u32 rows] [u32 cols]
//! [rows*cols x u32 data, row-major] [SENTINEL u8]
//! ```
//!
//! All integers use native byte order. `name_len` counts the terminating
//! NUL. The trailing [`SENTINEL`] is written for compatibility and never
//! required when reading.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod file;

pub use codec::{decode, decode_from, encode, encode_into, encoded_len, Field};
pub use error::{CodecError, IoCause};
pub use file::{read_matrix_file, write_matrix_file};

/// Legacy end-of-stream marker: the C `EOF` constant (-1) truncated to a
/// byte.
pub const SENTINEL: u8 = 0xFF;

/// Terminator written after the name bytes.
pub const NAME_TERMINATOR: u8 = 0;
