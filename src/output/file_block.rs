// src/output/file_block.rs

use crate::constants::{CONTENT_DELIMITER, FILE_MARKER, SIZE_MARKER, TYPE_MARKER};
use crate::core_types::FileEntry;

/// Writes a single file's annotation block: blank-line separation, the three
/// marker lines, and the fenced content.
///
/// Content is embedded verbatim. A file that itself contains the fence line
/// is not escaped.
pub(crate) fn write_file_block(out: &mut String, entry: &FileEntry) {
    out.push_str("\n\n");
    out.push_str(FILE_MARKER);
    out.push_str(&entry.path);
    out.push('\n');
    out.push_str(&format!("{}{} bytes\n", SIZE_MARKER, entry.size));
    out.push_str(&format!("{}{}\n", TYPE_MARKER, entry.media_type));
    out.push_str(CONTENT_DELIMITER);
    out.push('\n');
    out.push_str(&entry.content);
    out.push('\n');
    out.push_str(CONTENT_DELIMITER);
    out.push('\n');
}
