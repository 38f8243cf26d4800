// src/errors.rs

//! Defines application-specific error types.
//!
//! This module provides the [`Error`] enum, which categorizes the failures
//! that can occur while walking entry handles, reading file contents, and
//! exporting the generated document, offering more context than generic I/O
//! errors.

use thiserror::Error;

/// Alias for `std::result::Result` specialized to this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while indexing directory contents.
///
/// The walk absorbs per-entry failures ([`Error::Read`], [`Error::Listing`],
/// [`Error::SizeLimitExceeded`]) into diagnostic records; only host-boundary
/// failures ([`Error::Io`], [`Error::Clipboard`]) propagate to the caller.
#[derive(Error, Debug)]
pub enum Error {
    // --- Host I/O Errors ---
    /// Error occurring during file or directory access at the host boundary
    /// (opening the top-level selection, materializing a download).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Per-Entry Failures (absorbed by the walk) ---
    /// A file handle failed to deliver its text content.
    #[error("Error reading file: {file}")]
    Read {
        /// The name of the file that could not be read.
        file: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A directory handle failed while listing a batch of children.
    #[error("Error reading directory: {path}")]
    Listing {
        /// The logical path of the directory being listed.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A file's declared size exceeds the configured cap. Such files are
    /// counted and skipped without being opened.
    #[error("File exceeds maximum size limit")]
    SizeLimitExceeded,

    // --- Clipboard Errors ---
    /// Error related to clipboard operations (copying).
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Errors from the system clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened.
    #[error("failed to initialize clipboard: {0}")]
    Initialization(String),
    /// The clipboard rejected the new contents.
    #[error("failed to set clipboard contents: {0}")]
    SetContent(String),
}

/// Helper function to create an [`Error::Io`] with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = io_error_with_path(source_error, &path);

        match error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
                assert!(source.to_string().contains("File not found"));
            }
            _ => panic!("Expected Error::Io"),
        }

        // Test with different path representation
        let source_error_perm = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let error_perm = io_error_with_path(source_error_perm, "another/path");
        match error_perm {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("another/path"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_absorbed_error_display_text() {
        // These strings become diagnostic records, so their wording is load-bearing.
        let read = Error::Read {
            file: "notes.txt".to_string(),
            source: io::Error::other("device gone"),
        };
        assert_eq!(read.to_string(), "Error reading file: notes.txt");

        let listing = Error::Listing {
            path: "src/vendor".to_string(),
            source: io::Error::other("listing failed"),
        };
        assert_eq!(listing.to_string(), "Error reading directory: src/vendor");

        assert_eq!(
            Error::SizeLimitExceeded.to_string(),
            "File exceeds maximum size limit"
        );
    }

    #[test]
    fn test_clipboard_error_wrapping() {
        let inner = ClipboardError::Initialization("no display".to_string());
        let error: Error = inner.into();
        assert!(error.to_string().contains("Clipboard error"));
        assert!(error.to_string().contains("no display"));
    }
}
