// src/output/mod.rs

//! Renders a [`ProcessingResult`] into the final text document.
//!
//! The render is a deterministic single pass: the header followed by one
//! annotated block per entry, in traversal order. Equal results render
//! byte-identical documents.

use crate::core_types::ProcessingResult;
use log::debug;

pub(crate) mod file_block;
pub(crate) mod header;

/// Renders the document for a completed walk.
///
/// The header always appears, even for an empty result; entry blocks follow
/// in the order they were accumulated.
///
/// # Examples
///
/// ```
/// use code_index::core_types::ProcessingResult;
/// use code_index::output::generate_output;
///
/// let document = generate_output(&ProcessingResult::default());
/// assert!(document.starts_with("# Directory Content Summary\n"));
/// assert!(document.contains("Total files: 0\n"));
/// ```
pub fn generate_output(result: &ProcessingResult) -> String {
    debug!("Rendering document for {} entries", result.entries.len());

    let mut out = String::new();
    header::write_header(&mut out, result);
    for entry in &result.entries {
        file_block::write_file_block(&mut out, entry);
    }
    out
}
