//! Elementwise matrix operations.
//!
//! All operations either complete fully or leave their destination
//! untouched: preconditions are checked before the first cell is written.

use rand::Rng;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::name::MatrixName;

/// Direction of a bitwise [`shift`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Logical shift towards the most significant bit.
    Left,
    /// Logical shift towards the least significant bit.
    Right,
}

impl ShiftDirection {
    /// `'l'` selects [`Left`](Self::Left); every other character selects
    /// [`Right`](Self::Right).
    pub fn from_char(c: char) -> Self {
        if c == 'l' {
            Self::Left
        } else {
            Self::Right
        }
    }
}

fn require_cells(m: &Matrix) -> Result<(), MatrixError> {
    if m.rows() == 0 || m.cols() == 0 {
        return Err(MatrixError::EmptyMatrix {
            name: m.name().to_string(),
        });
    }
    Ok(())
}

/// Whether `a` and `b` have the same shape and identical cells.
///
/// Matrices of different shapes are never equal, even when one buffer is a
/// prefix of the other.
pub fn equal(a: &Matrix, b: &Matrix) -> bool {
    a.shape() == b.shape() && a.data() == b.data()
}

/// Copy every cell of `src` into the front of `dest`'s buffer.
///
/// `dest` must hold at least `src.len()` cells. After the copy the prefix is
/// compared against `src`.
pub fn duplicate(src: &Matrix, dest: &mut Matrix) -> Result<(), MatrixError> {
    let n = src.len();
    if dest.len() < n {
        return Err(MatrixError::DimensionMismatch {
            left: src.shape(),
            right: dest.shape(),
        });
    }
    dest.data_mut()[..n].copy_from_slice(src.data());
    if dest.data()[..n] != *src.data() {
        return Err(MatrixError::DuplicateVerifyFailed {
            src: src.name().to_string(),
            dest: dest.name().to_string(),
        });
    }
    Ok(())
}

/// Allocate a copy of `src` under a new name.
pub fn duplicate_as(src: &Matrix, name: MatrixName) -> Result<Matrix, MatrixError> {
    let mut dest = Matrix::with_name(name, src.rows(), src.cols())?;
    duplicate(src, &mut dest)?;
    Ok(dest)
}

/// Shift every cell of `m` by `amount` bits.
///
/// Shifts are logical and lossy: bits pushed past either end are gone, so a
/// left shift followed by a right shift of the same amount does not restore
/// values with high bits set. An `amount` of 32 or more clears every cell.
pub fn shift(m: &mut Matrix, direction: ShiftDirection, amount: u32) -> Result<(), MatrixError> {
    require_cells(m)?;
    let op: fn(u32, u32) -> Option<u32> = match direction {
        ShiftDirection::Left => u32::checked_shl,
        ShiftDirection::Right => u32::checked_shr,
    };
    for v in m.data_mut() {
        *v = op(*v, amount).unwrap_or(0);
    }
    Ok(())
}

/// `c = a + b`, cell by cell, wrapping at 2^32.
///
/// `a` and `b` must agree on both rows and columns, and `c` must have the
/// same shape as `a`.
pub fn add(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), MatrixError> {
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    if c.shape() != a.shape() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: c.shape(),
        });
    }
    for ((dst, &x), &y) in c.data_mut().iter_mut().zip(a.data()).zip(b.data()) {
        *dst = x.wrapping_add(y);
    }
    Ok(())
}

/// Allocate `a + b` as a new matrix shaped like `a`.
pub fn sum(a: &Matrix, b: &Matrix, name: MatrixName) -> Result<Matrix, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut c = Matrix::with_name(name, a.rows(), a.cols())?;
    add(a, b, &mut c)?;
    Ok(c)
}

/// Fill every cell with a value drawn uniformly from `lo..=hi`.
pub fn random_fill<R: Rng + ?Sized>(
    m: &mut Matrix,
    lo: u32,
    hi: u32,
    rng: &mut R,
) -> Result<(), MatrixError> {
    if hi < lo {
        return Err(MatrixError::InvalidRange { lo, hi });
    }
    require_cells(m)?;
    for v in m.data_mut() {
        *v = rng.random_range(lo..=hi);
    }
    Ok(())
}

/// Textual dump: name, dimensions, then one space-separated line per row.
pub fn render(m: &Matrix) -> String {
    m.to_string()
}
