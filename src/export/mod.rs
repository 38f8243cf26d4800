// src/export/mod.rs

//! Materializes the rendered document for the outside world.
//!
//! The document leaves the pipeline one of two ways: as a downloadable
//! payload (a named byte buffer the host saves or serves) or through the
//! system clipboard.

#[cfg(feature = "clipboard")]
mod clipboard;
#[cfg(feature = "clipboard")]
pub use clipboard::copy_to_clipboard;

use crate::constants::{DOWNLOAD_FILE_NAME, DOWNLOAD_FILE_STEM, DOWNLOAD_MEDIA_TYPE};
use crate::errors::{io_error_with_path, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use std::path::{Path, PathBuf};

/// A named, typed byte buffer ready to hand to a host's save dialog,
/// download response, or filesystem.
#[derive(Debug, Clone)]
pub struct DownloadPayload {
    /// Suggested file name.
    pub filename: String,
    /// Media type of `bytes`.
    pub media_type: String,
    /// The document, UTF-8 encoded.
    pub bytes: Vec<u8>,
}

impl DownloadPayload {
    /// Wraps a document under the fixed default name.
    pub fn new(document: &str) -> Self {
        Self {
            filename: DOWNLOAD_FILE_NAME.to_string(),
            media_type: DOWNLOAD_MEDIA_TYPE.to_string(),
            bytes: document.as_bytes().to_vec(),
        }
    }

    /// Wraps a document under a name carrying the current UTC time, so
    /// repeated exports do not overwrite each other.
    pub fn timestamped(document: &str) -> Self {
        Self {
            filename: download_filename(Utc::now()),
            ..Self::new(document)
        }
    }

    /// Writes the payload into `dir` under its own file name and returns
    /// the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes).map_err(|e| io_error_with_path(e, &path))?;
        debug!("Wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(path)
    }
}

/// Builds the timestamped download name for a given instant: the ISO-8601
/// UTC timestamp with `:` and `.` replaced by `-`, keeping the name legal
/// on common filesystems.
pub fn download_filename(at: DateTime<Utc>) -> String {
    let timestamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{DOWNLOAD_FILE_STEM}-{timestamp}.txt")
}
