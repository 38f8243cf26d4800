// src/entry.rs

//! The entry-handle contract between hosts and the traversal engine.
//!
//! Hosts hand the engine a forest of [`Entry`] values. The engine never
//! touches a real filesystem itself; everything it learns about the tree
//! comes through these traits. [`crate::fs`] implements them over the local
//! filesystem and [`crate::memory`] implements them over in-memory data.

use async_trait::async_trait;
use std::fmt;
use std::io;

/// A readable leaf in the entry forest.
///
/// Metadata accessors are synchronous because hosts already hold the values;
/// only the content read suspends.
#[async_trait]
pub trait FileHandle: Send + Sync {
    /// The file's base name, without any directory components.
    fn name(&self) -> &str;

    /// The size reported by the host's metadata, in bytes. Consulted before
    /// any read; oversized files are never opened.
    fn size(&self) -> u64;

    /// The media type the host declares for this file, or an empty string
    /// when the host has no opinion.
    fn media_type(&self) -> &str;

    /// Reads the entire content as text in a single shot. There is no
    /// partial-read or retry path.
    async fn read_text(&self) -> io::Result<String>;
}

/// A listable node in the entry forest.
///
/// Children arrive in batches: each call returns the next batch, and an
/// empty batch means the listing is exhausted. The sequence is finite and
/// cannot be restarted, so callers must drain it exactly once.
#[async_trait]
pub trait DirectoryHandle: Send + Sync {
    /// The directory's base name.
    fn name(&self) -> &str;

    /// Returns the next batch of children, or an empty vector once the
    /// listing is exhausted.
    async fn next_batch(&mut self) -> io::Result<Vec<Entry>>;
}

/// One node handed to the engine: a file or a directory.
pub enum Entry {
    /// A readable file.
    File(Box<dyn FileHandle>),
    /// A listable directory.
    Directory(Box<dyn DirectoryHandle>),
}

impl Entry {
    /// The node's base name.
    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => file.name(),
            Entry::Directory(dir) => dir.name(),
        }
    }

    /// Returns `true` for the file variant.
    pub fn is_file(&self) -> bool {
        matches!(self, Entry::File(_))
    }

    /// Returns `true` for the directory variant.
    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }
}

// Handles are not Debug themselves, so show the variant and name only.
impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::File(file) => f.debug_tuple("File").field(&file.name()).finish(),
            Entry::Directory(dir) => f.debug_tuple("Directory").field(&dir.name()).finish(),
        }
    }
}
