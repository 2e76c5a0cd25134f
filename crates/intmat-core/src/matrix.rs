//! The [`Matrix`] entity: a named, row-major grid of `u32` cells.

use std::fmt;

use crate::error::MatrixError;
use crate::name::MatrixName;

/// A named 2-D grid of fixed-width unsigned integers.
///
/// The cell buffer is row-major and always holds exactly `rows * cols`
/// elements. A matrix with zero rows or columns is valid and simply has no
/// cells.
///
/// # Examples
///
/// ```
/// use intmat_core::Matrix;
///
/// let m = Matrix::zeros("A", 2, 3).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.data(), &[0; 6]);
/// assert_eq!(m.get(1, 2), Some(0));
/// assert_eq!(m.get(2, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    name: MatrixName,
    rows: u32,
    cols: u32,
    data: Vec<u32>,
}

/// Number of cells in a `rows x cols` grid, or `None` on overflow.
pub fn cell_count(rows: u32, cols: u32) -> Option<usize> {
    (rows as usize).checked_mul(cols as usize)
}

/// Allocate a zeroed cell buffer without aborting on exhaustion.
pub(crate) fn zeroed_cells(rows: u32, cols: u32) -> Result<Vec<u32>, MatrixError> {
    let failed = MatrixError::AllocationFailed { rows, cols };
    let len = cell_count(rows, cols).ok_or(failed.clone())?;
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| failed)?;
    data.resize(len, 0);
    Ok(data)
}

impl Matrix {
    /// Create a zero-filled matrix.
    ///
    /// Fails with [`MatrixError::InvalidName`] if the name does not fit the
    /// persisted format, or [`MatrixError::AllocationFailed`] if the cell
    /// buffer cannot be reserved.
    pub fn zeros(name: &str, rows: u32, cols: u32) -> Result<Self, MatrixError> {
        let name = MatrixName::new(name)?;
        Self::with_name(name, rows, cols)
    }

    /// Create a zero-filled matrix from an already validated name.
    pub fn with_name(name: MatrixName, rows: u32, cols: u32) -> Result<Self, MatrixError> {
        let data = zeroed_cells(rows, cols)?;
        Ok(Self {
            name,
            rows,
            cols,
            data,
        })
    }

    /// Build a matrix around an existing row-major buffer.
    pub fn from_parts(
        name: MatrixName,
        rows: u32,
        cols: u32,
        data: Vec<u32>,
    ) -> Result<Self, MatrixError> {
        let expected = cell_count(rows, cols).ok_or(MatrixError::AllocationFailed { rows, cols })?;
        if data.len() != expected {
            return Err(MatrixError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            name,
            rows,
            cols,
            data,
        })
    }

    /// The matrix name.
    pub fn name(&self) -> &MatrixName {
        &self.name
    }

    /// Replace the name, keeping shape and data.
    pub fn rename(&mut self, name: &str) -> Result<(), MatrixError> {
        self.name = MatrixName::new(name)?;
        Ok(())
    }

    /// Row count.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major cell buffer.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Mutable row-major cell buffer. The length cannot change.
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data
            .get(row as usize * self.cols as usize + col as usize)
            .copied()
    }

    /// Iterate over rows as slices. Yields nothing when `cols == 0`.
    pub fn row_slices(&self) -> impl Iterator<Item = &[u32]> {
        // With zero columns the buffer is empty, so the clamp only avoids
        // the chunk-size-zero panic.
        self.data.chunks_exact((self.cols as usize).max(1))
    }

    /// Consume the matrix into `(name, rows, cols, data)`.
    pub fn into_parts(self) -> (MatrixName, u32, u32, Vec<u32>) {
        (self.name, self.rows, self.cols, self.data)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix Contents ({}):", self.name)?;
        write!(f, "DIM = ({},{})", self.rows, self.cols)?;
        for row in self.row_slices() {
            writeln!(f)?;
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}
