// src/filtering/mod.rs

//! Decides which files count as text.
//!
//! The classifier consults only what the host declares (file name and media
//! type); file content is never inspected. The cost of letting an unknown
//! binary through is a garbled block in the output, while wrongly rejecting
//! a text file silently drops it, so unknown files pass.

mod extension;
mod media_type;

use extension::has_text_extension;
use media_type::{matches_binary_media_type, matches_text_media_type};

/// Classifies a file as text or not from its name and declared media type.
///
/// The rules apply in order, first match wins:
///
/// 1. **Known text media type:** the declared type contains a known text
///    fragment (`text/plain`, `application/json`, ...).
/// 2. **Known text extension:** the lowercased name ends with a known text
///    suffix (`.rs`, `.tsx`, `.gitignore`, ...).
/// 3. **Known binary media type:** the declared type contains a known binary
///    fragment (`image/`, `application/zip`, ...).
/// 4. **Permissive default:** everything else is treated as text.
///
/// An empty `media_type` means the host declared nothing; such files are
/// classified by extension alone, or by the default.
///
/// # Examples
///
/// ```
/// use code_index::filtering::is_text_file;
///
/// assert!(is_text_file("notes.txt", "text/plain"));
/// // The extension rule rescues files with unhelpful declared types.
/// assert!(is_text_file("stream.ts", "video/mp2t"));
/// assert!(!is_text_file("logo.png", "image/png"));
/// // Unknown on both axes passes.
/// assert!(is_text_file("LICENSE", ""));
/// ```
pub fn is_text_file(name: &str, media_type: &str) -> bool {
    // 1. Declared text type
    if matches_text_media_type(media_type) {
        return true;
    }
    // 2. Known text extension
    if has_text_extension(name) {
        return true;
    }
    // 3. Declared binary type
    if matches_binary_media_type(media_type) {
        return false;
    }
    // 4. Default: treat as text
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_text_type_wins() {
        assert!(is_text_file("data.bin", "text/plain"));
        assert!(is_text_file("payload", "application/json; charset=utf-8"));
    }

    #[test]
    fn test_extension_beats_binary_type() {
        // Rule order is load-bearing: hosts guessing from extensions declare
        // `.ts` as an MPEG transport stream.
        assert!(is_text_file("component.ts", "video/mp2t"));
    }

    #[test]
    fn test_binary_type_excludes() {
        assert!(!is_text_file("logo.png", "image/png"));
        assert!(!is_text_file("song.mp3", "audio/mpeg"));
        assert!(!is_text_file("report.pdf", "application/pdf"));
        assert!(!is_text_file("bundle.zip", "application/zip"));
    }

    #[test]
    fn test_empty_type_classified_by_extension() {
        assert!(is_text_file("readme.md", ""));
        assert!(is_text_file(".gitignore", ""));
        assert!(!is_text_file("photo.jpg", "image/jpeg"));
    }

    #[test]
    fn test_unknown_defaults_to_text() {
        assert!(is_text_file("Makefile", ""));
        assert!(is_text_file("LICENSE", ""));
        assert!(is_text_file("data.blob", "application/octet-stream"));
    }
}
