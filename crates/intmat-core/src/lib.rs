//! Core types for the intmat matrix tool.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! [`Matrix`] entity, its validated [`MatrixName`], the elementwise
//! operations in [`ops`], and the error types shared across the workspace.
//!
//! # Error kinds
//!
//! Every error in the workspace classifies itself into one of the four
//! [`ErrorKind`]s so that callers can react uniformly, whichever subsystem
//! produced the failure.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod matrix;
pub mod name;
pub mod ops;

pub use error::{ErrorKind, MatrixError};
pub use matrix::Matrix;
pub use name::{MatrixName, MAX_NAME_LEN};
