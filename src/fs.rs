// src/fs.rs

//! Local-filesystem host adapter.
//!
//! Implements the entry-handle contract over `tokio::fs`, playing the role
//! a browser plays for a dropped folder: it owns the real I/O, guesses
//! declared media types from file names, and lists directories in
//! fixed-size batches. Entries that are neither file nor directory are
//! skipped; symbolic links are followed only for the top-level selection,
//! never inside the tree.

use crate::entry::{DirectoryHandle, Entry, FileHandle};
use crate::errors::{io_error_with_path, Result};
use async_trait::async_trait;
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::ReadDir;

/// How many children a single listing call hands out.
const DIR_BATCH_SIZE: usize = 100;

/// Opens a path as a single top-level entry, the way a host hands over one
/// dropped or picked item.
///
/// This is the one place where a filesystem failure is fatal: a selection
/// whose metadata cannot be read has nothing to walk. Failures deeper in
/// the tree are absorbed by the walk instead.
///
/// # Errors
/// Returns [`crate::errors::Error::Io`] when the path cannot be inspected
/// or is neither a file nor a directory.
pub async fn open_entry(path: impl AsRef<Path>) -> Result<Entry> {
    let path = path.as_ref();
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| io_error_with_path(e, path))?;
    let name = entry_name(path).await?;

    if metadata.is_dir() {
        debug!("Opening directory {}", path.display());
        Ok(Entry::Directory(Box::new(LocalDirectory::new(
            path.to_path_buf(),
            name,
        ))))
    } else if metadata.is_file() {
        debug!("Opening file {}", path.display());
        Ok(Entry::File(Box::new(LocalFile::new(
            path.to_path_buf(),
            name,
            metadata.len(),
        ))))
    } else {
        Err(io_error_with_path(
            io::Error::other("not a file or directory"),
            path,
        ))
    }
}

/// The base name of the selection. Paths with no final component ("." or
/// "/") are resolved first so the entry still gets a real name.
async fn entry_name(path: &Path) -> Result<String> {
    if let Some(name) = path.file_name() {
        return Ok(name.to_string_lossy().into_owned());
    }
    let canonical = tokio::fs::canonicalize(path)
        .await
        .map_err(|e| io_error_with_path(e, path))?;
    Ok(canonical
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| canonical.display().to_string()))
}

/// What a browser-like host would put in a file's `type` field: a guess
/// from the name, or an empty string for unknown extensions.
fn declared_media_type(path: &Path) -> &'static str {
    mime_guess::from_path(path).first_raw().unwrap_or("")
}

/// A file on the local filesystem.
struct LocalFile {
    path: PathBuf,
    name: String,
    size: u64,
    media_type: &'static str,
}

impl LocalFile {
    fn new(path: PathBuf, name: String, size: u64) -> Self {
        let media_type = declared_media_type(&path);
        Self {
            path,
            name,
            size,
            media_type,
        }
    }
}

#[async_trait]
impl FileHandle for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn media_type(&self) -> &str {
        self.media_type
    }

    async fn read_text(&self) -> io::Result<String> {
        tokio::fs::read_to_string(&self.path).await
    }
}

/// A directory on the local filesystem.
///
/// The underlying `read_dir` stream opens lazily on the first listing call
/// and is released once exhausted.
struct LocalDirectory {
    path: PathBuf,
    name: String,
    reader: Option<ReadDir>,
    exhausted: bool,
}

impl LocalDirectory {
    fn new(path: PathBuf, name: String) -> Self {
        Self {
            path,
            name,
            reader: None,
            exhausted: false,
        }
    }
}

#[async_trait]
impl DirectoryHandle for LocalDirectory {
    fn name(&self) -> &str {
        &self.name
    }

    async fn next_batch(&mut self) -> io::Result<Vec<Entry>> {
        if self.exhausted {
            return Ok(Vec::new());
        }
        if self.reader.is_none() {
            self.reader = Some(tokio::fs::read_dir(&self.path).await?);
        }

        let mut batch = Vec::new();
        if let Some(reader) = self.reader.as_mut() {
            while batch.len() < DIR_BATCH_SIZE {
                match reader.next_entry().await? {
                    Some(dir_entry) => {
                        if let Some(child) = child_entry(dir_entry).await {
                            batch.push(child);
                        }
                    }
                    None => {
                        self.exhausted = true;
                        break;
                    }
                }
            }
        }
        if self.exhausted {
            // Close the directory handle as soon as the listing ends.
            self.reader = None;
        }
        Ok(batch)
    }
}

/// Maps one raw directory entry to a handle, or `None` for entries that
/// are neither file nor directory (sockets, unfollowed symlinks, entries
/// that vanished mid-listing).
async fn child_entry(dir_entry: tokio::fs::DirEntry) -> Option<Entry> {
    let path = dir_entry.path();
    let name = dir_entry.file_name().to_string_lossy().into_owned();

    let file_type = match dir_entry.file_type().await {
        Ok(file_type) => file_type,
        Err(e) => {
            warn!("Skipping unreadable entry {}: {}", path.display(), e);
            return None;
        }
    };

    if file_type.is_dir() {
        Some(Entry::Directory(Box::new(LocalDirectory::new(path, name))))
    } else if file_type.is_file() {
        let size = match dir_entry.metadata().await {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                warn!("Skipping unreadable entry {}: {}", path.display(), e);
                return None;
            }
        };
        Some(Entry::File(Box::new(LocalFile::new(path, name, size))))
    } else {
        debug!("Ignoring non-file entry {}", path.display());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_entry_missing_path_is_fatal() {
        let result = open_entry("definitely/not/present/anywhere").await;
        let err = result.expect_err("missing selection must fail");
        let message = err.to_string();
        assert!(message.contains("I/O error accessing path"));
        assert!(message.contains("definitely/not/present/anywhere"));
    }

    #[tokio::test]
    async fn test_open_file_entry_reads_metadata_and_content() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("hello.txt");
        fs::write(&path, "hello adapter")?;

        let entry = open_entry(&path).await?;
        let file = match entry {
            Entry::File(file) => file,
            other => panic!("expected a file entry, got {other:?}"),
        };

        assert_eq!(file.name(), "hello.txt");
        assert_eq!(file.size(), 13);
        assert_eq!(file.media_type(), "text/plain");
        assert_eq!(file.read_text().await?, "hello adapter");
        Ok(())
    }

    #[tokio::test]
    async fn test_media_type_guessed_from_name_only() -> anyhow::Result<()> {
        let dir = tempdir()?;
        for name in ["page.html", "logo.png", "mystery.zzz"] {
            fs::write(dir.path().join(name), "irrelevant")?;
        }

        let media_type = |name: &str| {
            let path = dir.path().join(name);
            async move {
                match open_entry(&path).await {
                    Ok(Entry::File(file)) => file.media_type().to_string(),
                    other => panic!("expected a file entry, got {other:?}"),
                }
            }
        };

        assert_eq!(media_type("page.html").await, "text/html");
        assert_eq!(media_type("logo.png").await, "image/png");
        // Unknown extensions get no declared type, like a browser.
        assert_eq!(media_type("mystery.zzz").await, "");
        Ok(())
    }

    #[tokio::test]
    async fn test_listing_batches_and_terminates_empty() -> anyhow::Result<()> {
        let dir = tempdir()?;
        for i in 0..150 {
            fs::write(dir.path().join(format!("f{i:03}.txt")), "x")?;
        }

        let mut dir_handle = match open_entry(dir.path()).await? {
            Entry::Directory(dir_handle) => dir_handle,
            other => panic!("expected a directory entry, got {other:?}"),
        };

        let first = dir_handle.next_batch().await?;
        let second = dir_handle.next_batch().await?;
        let third = dir_handle.next_batch().await?;

        assert_eq!(first.len(), 100);
        assert_eq!(second.len(), 50);
        assert!(third.is_empty());
        // Exhaustion is stable.
        assert!(dir_handle.next_batch().await?.is_empty());
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinks_inside_tree_are_skipped() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("real.txt");
        fs::write(&target, "real")?;
        std::os::unix::fs::symlink(&target, dir.path().join("link.txt"))?;

        let mut dir_handle = match open_entry(dir.path()).await? {
            Entry::Directory(dir_handle) => dir_handle,
            other => panic!("expected a directory entry, got {other:?}"),
        };

        let children = dir_handle.next_batch().await?;
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name(), "real.txt");
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_directory_lists_nothing() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let mut dir_handle = match open_entry(dir.path()).await? {
            Entry::Directory(dir_handle) => dir_handle,
            other => panic!("expected a directory entry, got {other:?}"),
        };
        assert!(dir_handle.next_batch().await?.is_empty());
        Ok(())
    }
}
