//! `code-index` walks a tree of file-system entry handles, filters out
//! binary and oversized files, reads the text content of the rest, and
//! concatenates everything into a single annotated text document, ready to
//! download or copy to the clipboard.
//!
//! The pipeline has three stages:
//! 1.  **Process**: walk the entry forest depth-first, classifying and
//!     reading each file into a [`ProcessingResult`].
//! 2.  **Render**: generate the delimited output document from the result.
//! 3.  **Export**: wrap the document as a named download payload or copy it
//!     to the system clipboard.
//!
//! The walk never touches a filesystem directly: it runs over the
//! [`entry::Entry`] handle contract, which the [`fs`] module implements for
//! the local filesystem and the [`memory`] module implements for in-memory
//! data. Hosts with their own storage implement the two traits themselves.
//!
//! # Example: Library Usage
//!
//! The following example walks an in-memory tree, renders the document, and
//! wraps it for download.
//!
//! ```
//! use code_index::export::DownloadPayload;
//! use code_index::memory::{MemoryDirectory, MemoryFile};
//! use code_index::{generate_output, process_entries};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // 1. Build the entry forest (a host would hand this over instead).
//! let src = MemoryDirectory::new(
//!     "src",
//!     vec![
//!         MemoryFile::new("main.rs", "fn main() {}").into_entry(),
//!         MemoryFile::new("logo.png", "png bytes")
//!             .with_media_type("image/png")
//!             .into_entry(),
//!     ],
//! );
//!
//! // 2. Walk it.
//! let (result, errors) = process_entries(vec![src.into_entry()]).await;
//! assert_eq!(result.processed_files, 1);
//! assert_eq!(result.skipped_files, 1);
//! assert!(errors.is_empty());
//!
//! // 3. Render and export.
//! let document = generate_output(&result);
//! assert!(document.contains("# FILE: src/main.rs"));
//!
//! let payload = DownloadPayload::new(&document);
//! assert_eq!(payload.filename, "code-index.txt");
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod core_types;
pub mod entry;
pub mod errors;
pub mod export;
pub mod filtering;
pub mod fs;
pub mod memory;
pub mod output;
pub mod processing;
pub mod util;

// Re-export key public types for easier use as a library
pub use config::ProcessConfig;
pub use constants::MAX_FILE_SIZE;
pub use core_types::{FileEntry, ProcessingError, ProcessingResult};
pub use entry::{DirectoryHandle, Entry, FileHandle};
pub use errors::{Error, Result};
#[cfg(feature = "clipboard")]
pub use export::copy_to_clipboard;
pub use export::DownloadPayload;
pub use filtering::is_text_file;
pub use output::generate_output;
pub use processing::{process_entries, process_entries_with};

use std::path::Path;

/// Indexes a local path in one call: opens it as a top-level entry, walks
/// it, and renders the document.
///
/// This is the whole pipeline for filesystem hosts. Failure to open the
/// selection itself is the only fatal error; everything deeper is absorbed
/// into the returned diagnostics.
///
/// # Examples
///
/// ```
/// use std::fs;
/// use tempfile::tempdir;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let dir = tempdir()?;
/// fs::write(dir.path().join("note.txt"), "remember this")?;
///
/// let (document, result, errors) = code_index::index_path(dir.path()).await?;
///
/// assert_eq!(result.processed_files, 1);
/// assert!(document.contains("remember this"));
/// assert!(errors.is_empty());
/// # Ok(())
/// # }
/// ```
pub async fn index_path(
    path: impl AsRef<Path>,
) -> Result<(String, ProcessingResult, Vec<ProcessingError>)> {
    index_path_with(path, &ProcessConfig::default()).await
}

/// Same as [`index_path`], with an explicit configuration.
pub async fn index_path_with(
    path: impl AsRef<Path>,
    config: &ProcessConfig,
) -> Result<(String, ProcessingResult, Vec<ProcessingError>)> {
    let entry = fs::open_entry(path).await?;
    let (result, errors) = process_entries_with(vec![entry], config).await;
    let document = generate_output(&result);
    Ok((document, result, errors))
}
