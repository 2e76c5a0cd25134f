//! File persistence for encoded matrices.
//!
//! One matrix per file. Handles and scratch buffers are owned values, so
//! they are released on every return path, including errors.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::Path;

use intmat_core::Matrix;
use log::{debug, warn};

use crate::codec::{decode_from, encode};
use crate::error::CodecError;

/// Write `m` to `path`, creating or truncating the file.
///
/// The image is encoded into one buffer and written with a single call,
/// then synced so that deferred write errors surface here.
pub fn write_matrix_file(path: &Path, m: &Matrix) -> Result<(), CodecError> {
    let bytes = encode(m);
    let result = write_synced(path, &bytes);
    match &result {
        Ok(()) => debug!(
            "wrote matrix ({}) to {} ({} bytes)",
            m.name(),
            path.display(),
            bytes.len()
        ),
        Err(e) => warn!("failed to write {}: {e}", path.display()),
    }
    result
}

/// Read one matrix from `path`.
pub fn read_matrix_file(path: &Path) -> Result<Matrix, CodecError> {
    let result = File::open(path)
        .map_err(CodecError::from)
        .and_then(|file| decode_from(&mut BufReader::new(file)));
    match &result {
        Ok(m) => debug!("read matrix ({}) from {}", m.name(), path.display()),
        Err(e) => warn!("failed to read {}: {e}", path.display()),
    }
    result
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), CodecError> {
    let mut file = create_truncate(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}

#[cfg(unix)]
fn create_truncate(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn create_truncate(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
