// src/filtering/media_type.rs

// Declared media types are free-form host strings (often carrying charset
// parameters), so every check here is substring containment, not equality.

/// Media type fragments that identify text content.
const TEXT_MEDIA_TYPES: &[&str] = &[
    // --- Plain & markup ---
    "text/plain",
    "text/html",
    "text/css",
    "text/markdown",
    // --- Scripts & code ---
    "text/javascript",
    "application/javascript",
    "text/x-python",
    "text/x-java",
    "text/x-c",
    "text/x-c++",
    "text/x-typescript",
    "application/x-httpd-php",
    // --- Structured data ---
    "application/json",
    "application/xml",
    "text/csv",
    "text/tab-separated-values",
];

/// Media type fragments that identify binary content.
const BINARY_MEDIA_TYPES: &[&str] = &[
    // --- Whole media families ---
    "image/",
    "audio/",
    "video/",
    "font/",
    // --- Archives ---
    "application/zip",
    "application/x-zip-compressed",
    "application/x-7z-compressed",
    "application/x-rar-compressed",
    // --- Documents ---
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument",
    "application/vnd.ms-excel",
    "application/vnd.ms-powerpoint",
];

/// Checks if a declared media type contains a known text marker.
pub(crate) fn matches_text_media_type(media_type: &str) -> bool {
    TEXT_MEDIA_TYPES
        .iter()
        .any(|candidate| media_type.contains(candidate))
}

/// Checks if a declared media type contains a known binary marker.
pub(crate) fn matches_binary_media_type(media_type: &str) -> bool {
    BINARY_MEDIA_TYPES
        .iter()
        .any(|candidate| media_type.contains(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_match_ignores_parameters() {
        assert!(matches_text_media_type("text/plain"));
        assert!(matches_text_media_type("text/plain;charset=utf-8"));
        assert!(matches_text_media_type("application/json; charset=utf-8"));
    }

    #[test]
    fn test_text_no_match() {
        assert!(!matches_text_media_type(""));
        assert!(!matches_text_media_type("image/png"));
        assert!(!matches_text_media_type("application/octet-stream"));
        // Close, but not a listed fragment.
        assert!(!matches_text_media_type("text/typescript"));
    }

    #[test]
    fn test_binary_family_prefixes() {
        assert!(matches_binary_media_type("image/png"));
        assert!(matches_binary_media_type("audio/mpeg"));
        assert!(matches_binary_media_type("video/mp4"));
        assert!(matches_binary_media_type("font/woff2"));
    }

    #[test]
    fn test_binary_office_fragment_covers_all_formats() {
        // The fragment matches every modern Office format without listing them.
        assert!(matches_binary_media_type(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert!(matches_binary_media_type(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ));
        assert!(matches_binary_media_type("application/pdf"));
    }

    #[test]
    fn test_binary_no_match() {
        assert!(!matches_binary_media_type(""));
        assert!(!matches_binary_media_type("text/plain"));
        // Unlisted binary types fall through to the permissive default.
        assert!(!matches_binary_media_type("application/octet-stream"));
    }
}
