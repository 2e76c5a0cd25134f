//! Fixed-capacity matrix table for intmat.
//!
//! A [`MatrixTable`] owns up to `capacity` matrices in an indexed array of
//! slots. Insertion is circular: the `n`-th insertion lands in slot
//! `n % capacity`, evicting whatever lived there.
//!
//! # Architecture
//!
//! ```text
//! MatrixTable
//! ├── Box<[Option<Matrix>]>   (fixed-length slot array)
//! └── insertions: u64         (monotonic counter, per table)
//! ```
//!
//! The counter lives on the table itself, so independent tables never
//! influence each other's slot assignment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod slot;
pub mod table;

pub use config::TableConfig;
pub use error::TableError;
pub use slot::SlotIndex;
pub use table::{Insertion, MatrixTable};
