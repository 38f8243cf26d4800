// src/output/header.rs

use crate::constants::OUTPUT_HEADER_TITLE;
use crate::core_types::ProcessingResult;

/// Writes the summary header: the title line, the three count lines, and a
/// trailing blank line.
pub(crate) fn write_header(out: &mut String, result: &ProcessingResult) {
    out.push_str(OUTPUT_HEADER_TITLE);
    out.push('\n');
    out.push_str(&format!("Total files: {}\n", result.total_files));
    out.push_str(&format!("Processed files: {}\n", result.processed_files));
    out.push_str(&format!("Skipped files: {}\n\n", result.skipped_files));
}
