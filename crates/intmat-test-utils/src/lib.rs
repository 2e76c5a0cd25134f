//! Test fixtures for intmat development.
//!
//! Builders for small matrices with predictable contents and a per-test
//! scratch directory for file persistence tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use intmat_core::{Matrix, MatrixName};

static SCRATCH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Build a matrix from literal rows.
///
/// # Panics
///
/// Panics if the rows are ragged or the name is invalid.
pub fn matrix_from_rows(name: &str, rows: &[&[u32]]) -> Matrix {
    let cols = rows.first().map_or(0, |r| r.len());
    assert!(
        rows.iter().all(|r| r.len() == cols),
        "ragged rows passed to matrix_from_rows"
    );
    let data: Vec<u32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    Matrix::from_parts(
        MatrixName::new(name).expect("fixture name"),
        rows.len() as u32,
        cols as u32,
        data,
    )
    .expect("fixture shape")
}

/// A `rows x cols` matrix holding `start, start + 1, ...` in row-major order.
pub fn sequential_matrix(name: &str, rows: u32, cols: u32, start: u32) -> Matrix {
    let n = rows * cols;
    let data: Vec<u32> = (0..n).map(|i| start.wrapping_add(i)).collect();
    Matrix::from_parts(MatrixName::new(name).expect("fixture name"), rows, cols, data)
        .expect("fixture shape")
}

/// Create a fresh, empty directory under the system temp dir.
///
/// Unique per process and call; callers may remove it when done.
pub fn scratch_dir(label: &str) -> PathBuf {
    let n = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "intmat-{label}-{}-{n}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
