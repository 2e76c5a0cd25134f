//! Encode/decode for the matrix file format.
//!
//! Integers are native-endian `u32`. The name is stored with its NUL
//! terminator and `name_len` counts that terminator. No padding, no
//! version header.

use std::fmt;
use std::io::{self, Read, Write};

use intmat_core::matrix::cell_count;
use intmat_core::{Matrix, MatrixError, MatrixName, MAX_NAME_LEN};

use crate::error::CodecError;
use crate::{NAME_TERMINATOR, SENTINEL};

/// Words decoded per read call in [`decode_from`].
const DATA_CHUNK_WORDS: usize = 1024;

/// The on-disk fields, in file order. Used to report truncation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Leading `u32` name length.
    NameLen,
    /// Name bytes including the terminator.
    Name,
    /// `u32` row count.
    Rows,
    /// `u32` column count.
    Cols,
    /// Row-major cell words.
    Data,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NameLen => "name length",
            Self::Name => "name",
            Self::Rows => "row size",
            Self::Cols => "column size",
            Self::Data => "data",
        };
        f.write_str(text)
    }
}

// ── Primitive writers ───────────────────────────────────────────

fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_ne_bytes());
}

// ── Primitive readers ───────────────────────────────────────────

/// Fill `buf` completely, mapping a short read to [`CodecError::Truncated`].
fn read_field(r: &mut dyn Read, buf: &mut [u8], field: Field) -> Result<(), CodecError> {
    r.read_exact(buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            CodecError::Truncated { field }
        } else {
            CodecError::from(e)
        }
    })
}

fn read_u32(r: &mut dyn Read, field: Field) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    read_field(r, &mut buf, field)?;
    Ok(u32::from_ne_bytes(buf))
}

// ── Matrix encode/decode ────────────────────────────────────────

/// Exact size of the encoded image of `m`, sentinel included.
pub fn encoded_len(m: &Matrix) -> usize {
    4 + m.name().stored_len() + 4 + 4 + 4 * m.len() + 1
}

/// Encode `m` into a single buffer.
///
/// # Examples
///
/// ```
/// use intmat_core::Matrix;
/// use intmat_codec::{decode, encode, encoded_len, SENTINEL};
///
/// let m = Matrix::zeros("A", 1, 2).unwrap();
/// let bytes = encode(&m);
/// assert_eq!(bytes.len(), encoded_len(&m));
/// assert_eq!(bytes.len(), 4 + 2 + 4 + 4 + 8 + 1);
/// assert_eq!(bytes.last(), Some(&SENTINEL));
/// assert_eq!(decode(&bytes).unwrap(), m);
/// ```
pub fn encode(m: &Matrix) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(m));
    let name = m.name();
    put_u32(&mut buf, name.stored_len() as u32);
    buf.extend_from_slice(name.as_str().as_bytes());
    buf.push(NAME_TERMINATOR);
    put_u32(&mut buf, m.rows());
    put_u32(&mut buf, m.cols());
    for &v in m.data() {
        put_u32(&mut buf, v);
    }
    buf.push(SENTINEL);
    buf
}

/// Encode `m` and write the whole image with one `write_all`.
pub fn encode_into(w: &mut dyn Write, m: &Matrix) -> Result<(), CodecError> {
    w.write_all(&encode(m))?;
    Ok(())
}

/// Decode a matrix from a byte slice. Bytes after the data region (the
/// sentinel, or anything else) are ignored.
pub fn decode(bytes: &[u8]) -> Result<Matrix, CodecError> {
    let mut cursor = bytes;
    decode_from(&mut cursor)
}

/// Decode a matrix from a stream, reading exactly the fields of one image.
///
/// The sentinel byte is not consumed. Nothing is constructed until every
/// field has been read, so an error never leaves a partial matrix behind.
pub fn decode_from(r: &mut dyn Read) -> Result<Matrix, CodecError> {
    let name_len = read_u32(r, Field::NameLen)? as usize;
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Err(CodecError::MalformedName {
            detail: format!("name length {name_len} outside 1..={MAX_NAME_LEN}"),
        });
    }
    let mut name_buf = [0u8; MAX_NAME_LEN];
    let name_bytes = &mut name_buf[..name_len];
    read_field(r, name_bytes, Field::Name)?;
    let name = parse_name(name_bytes)?;

    let rows = read_u32(r, Field::Rows)?;
    let cols = read_u32(r, Field::Cols)?;
    let data = read_cells(r, rows, cols)?;

    Ok(Matrix::from_parts(name, rows, cols, data)?)
}

fn parse_name(bytes: &[u8]) -> Result<MatrixName, CodecError> {
    let Some((&last, text)) = bytes.split_last() else {
        return Err(CodecError::MalformedName {
            detail: "empty name field".to_string(),
        });
    };
    if last != NAME_TERMINATOR {
        return Err(CodecError::MalformedName {
            detail: "name is not NUL-terminated".to_string(),
        });
    }
    let text = std::str::from_utf8(text).map_err(|e| CodecError::MalformedName {
        detail: format!("invalid UTF-8: {e}"),
    })?;
    MatrixName::new(text).map_err(|e| CodecError::MalformedName {
        detail: e.to_string(),
    })
}

/// Read `rows * cols` words in bounded chunks so that a corrupt header
/// cannot force one huge up-front allocation.
fn read_cells(r: &mut dyn Read, rows: u32, cols: u32) -> Result<Vec<u32>, CodecError> {
    let alloc_failed = || CodecError::Matrix(MatrixError::AllocationFailed { rows, cols });
    let total = cell_count(rows, cols).ok_or_else(alloc_failed)?;

    let mut data: Vec<u32> = Vec::new();
    let mut chunk = [0u8; DATA_CHUNK_WORDS * 4];
    let mut remaining = total;
    while remaining > 0 {
        let words = remaining.min(DATA_CHUNK_WORDS);
        let bytes = &mut chunk[..words * 4];
        read_field(r, bytes, Field::Data)?;
        data.try_reserve(words).map_err(|_| alloc_failed())?;
        data.extend(
            bytes
                .chunks_exact(4)
                .map(|b| u32::from_ne_bytes([b[0], b[1], b[2], b[3]])),
        );
        remaining -= words;
    }
    Ok(data)
}
