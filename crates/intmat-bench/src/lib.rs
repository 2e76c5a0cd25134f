//! Benchmark profiles for the intmat matrix tool.
//!
//! - [`random_matrix`]: a seeded matrix of arbitrary shape
//! - [`full_table`]: a table with every slot occupied

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use intmat_core::{ops, Matrix, MatrixName};
use intmat_table::{MatrixTable, TableConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A `rows x cols` matrix filled from a ChaCha8 stream seeded with `seed`.
///
/// # Panics
///
/// Panics if `name` is invalid or the shape cannot be allocated.
pub fn random_matrix(name: &str, rows: u32, cols: u32, seed: u64) -> Matrix {
    let mut m = Matrix::zeros(name, rows, cols).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    if !m.is_empty() {
        ops::random_fill(&mut m, 0, u32::MAX, &mut rng).unwrap();
    }
    m
}

/// A table of `capacity` slots, each holding a distinct 8x8 matrix named
/// `m0`, `m1`, ...
pub fn full_table(capacity: usize, seed: u64) -> MatrixTable {
    let mut table = MatrixTable::new(TableConfig::new(capacity)).unwrap();
    for i in 0..capacity {
        let _ = table.insert(random_matrix(&format!("m{i}"), 8, 8, seed + i as u64));
    }
    table
}

/// The name of the last matrix in [`full_table`], which a linear lookup
/// reaches last.
pub fn last_name(capacity: usize) -> MatrixName {
    MatrixName::new(&format!("m{}", capacity.saturating_sub(1))).unwrap()
}
