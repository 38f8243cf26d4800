// src/processing/reader.rs

use crate::entry::FileHandle;
use crate::errors::{Error, Result};

/// Reads the entire content of a file handle into a String.
/// Wraps failures with the file's name. One attempt, no retry.
pub(super) async fn read_file_text(file: &dyn FileHandle) -> Result<String> {
    file.read_text().await.map_err(|e| Error::Read {
        file: file.name().to_string(),
        source: e,
    })
}
