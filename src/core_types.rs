//! Defines core data structures used throughout the indexing pipeline.
//!
//! These structs, `FileEntry`, `ProcessingResult`, and `ProcessingError`, are
//! central to how directory contents are walked, accumulated, and rendered.

/// One successfully read text file, ready for rendering.
///
/// # Examples
///
/// ```
/// use code_index::core_types::FileEntry;
///
/// let entry = FileEntry {
///     path: "src/main.rs".to_string(),
///     content: "fn main() {}".to_string(),
///     size: 12,
///     media_type: "text/plain".to_string(),
/// };
///
/// assert_eq!(entry.path, "src/main.rs");
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileEntry {
    /// Forward-slash logical path from the selection root, with leading
    /// separators stripped.
    pub path: String,
    /// The file's text content, exactly as the host delivered it.
    pub content: String,
    /// The size reported by the host's metadata, in bytes. Not recomputed
    /// from `content`, so the two can disagree if the host's metadata and
    /// stream disagree.
    pub size: u64,
    /// The declared media type, or `text/plain` when the host declared none.
    pub media_type: String,
}

/// Accumulated outcome of a completed walk.
///
/// At completion, `total_files == processed_files + skipped_files`, and
/// `total_size` covers every encountered file, including skipped ones.
///
/// # Examples
///
/// ```
/// use code_index::core_types::ProcessingResult;
///
/// let result: ProcessingResult = Default::default();
/// assert_eq!(result.total_files, 0);
/// assert!(result.entries.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProcessingResult {
    /// Successfully read files, in traversal order.
    pub entries: Vec<FileEntry>,
    /// Every file encountered during the walk.
    pub total_files: usize,
    /// Files read and included in `entries`.
    pub processed_files: usize,
    /// Files counted but excluded (oversized, non-text, or unreadable).
    pub skipped_files: usize,
    /// Sum of the declared sizes of all encountered files, in bytes.
    pub total_size: u64,
}

/// A per-entry failure absorbed during the walk.
///
/// These records never appear in the rendered document; the caller decides
/// whether to surface them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProcessingError {
    /// Logical path of the entry that failed.
    pub file: String,
    /// Human-readable description of the failure.
    pub error: String,
}
