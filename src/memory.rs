// src/memory.rs

//! In-memory entry handles.
//!
//! This is the analog of a host handing over loose files with no real
//! directory behind them (a file picker rather than a dropped folder), and
//! doubles as the deterministic fixture for engine tests: trees built here
//! list and read with no I/O and no ordering surprises.

use crate::entry::{DirectoryHandle, Entry, FileHandle};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;

/// A file whose content lives in memory.
///
/// # Examples
///
/// ```
/// use code_index::memory::MemoryFile;
///
/// let file = MemoryFile::new("app.ts", "export {};").with_media_type("text/typescript");
/// let entry = file.into_entry();
/// assert_eq!(entry.name(), "app.ts");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    media_type: String,
    size: u64,
    content: String,
}

impl MemoryFile {
    /// Creates a file with the given name and content. The declared size
    /// starts as the content's byte length and no media type is declared.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            media_type: String::new(),
            size: content.len() as u64,
            content,
        }
    }

    /// Declares a media type, as a browser-like host would.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Overrides the declared size without touching the content. Size and
    /// content are reported to the engine independently, so a handle may
    /// claim a size its content does not have.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Boxes this file into an [`Entry`].
    pub fn into_entry(self) -> Entry {
        Entry::File(Box::new(self))
    }
}

#[async_trait]
impl FileHandle for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    async fn read_text(&self) -> io::Result<String> {
        Ok(self.content.clone())
    }
}

/// A directory whose children live in memory.
///
/// By default a single listing call hands out every child; `with_batch_size`
/// splits the listing into fixed-size batches to exercise paginated
/// draining.
#[derive(Debug)]
pub struct MemoryDirectory {
    name: String,
    children: VecDeque<Entry>,
    batch_size: usize,
}

impl MemoryDirectory {
    /// Creates a directory with the given children, listed in order.
    pub fn new(name: impl Into<String>, children: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            children: children.into(),
            batch_size: usize::MAX,
        }
    }

    /// Limits how many children each listing call returns. A zero batch
    /// would read as an exhausted listing, so the size is clamped to 1.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Boxes this directory into an [`Entry`].
    pub fn into_entry(self) -> Entry {
        Entry::Directory(Box::new(self))
    }
}

#[async_trait]
impl DirectoryHandle for MemoryDirectory {
    fn name(&self) -> &str {
        &self.name
    }

    async fn next_batch(&mut self) -> io::Result<Vec<Entry>> {
        let take = self.batch_size.min(self.children.len());
        Ok(self.children.drain(..take).collect())
    }
}
