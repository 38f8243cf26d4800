// src/constants.rs

/// Largest file the pipeline will read, in bytes (20 MiB). Files above this
/// are counted and skipped without being opened.
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Title line of the generated document.
pub const OUTPUT_HEADER_TITLE: &str = "# Directory Content Summary";

/// Marker introducing a file path in the generated document.
pub const FILE_MARKER: &str = "# FILE: ";

/// Marker introducing a file size in the generated document.
pub const SIZE_MARKER: &str = "# SIZE: ";

/// Marker introducing a declared media type in the generated document.
pub const TYPE_MARKER: &str = "# TYPE: ";

/// Fence line placed on its own line before and after each file's content.
/// Content is embedded verbatim, so a file containing this line will confuse
/// consumers that split on it.
pub const CONTENT_DELIMITER: &str = "```";

/// Media type assumed for files whose host declares none.
pub const DEFAULT_MEDIA_TYPE: &str = "text/plain";

/// Download name used when no timestamp is requested.
pub const DOWNLOAD_FILE_NAME: &str = "code-index.txt";

/// Stem of the timestamped download name.
pub const DOWNLOAD_FILE_STEM: &str = "code-index";

/// Media type of the download payload.
pub const DOWNLOAD_MEDIA_TYPE: &str = "text/plain;charset=utf-8";
