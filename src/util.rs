// src/util.rs

//! Small formatting helpers shared across the pipeline.

const KB: u64 = 1024;
const MB: u64 = KB * 1024;

/// Normalizes a logical path for storage and display: runs of leading
/// slashes or backslashes are stripped so root-level files read as plain
/// names.
///
/// # Examples
///
/// ```
/// use code_index::util::format_file_path;
///
/// assert_eq!(format_file_path("/a.ts"), "a.ts");
/// assert_eq!(format_file_path("\\network\\a.ts"), "network\\a.ts");
/// assert_eq!(format_file_path("src/a.ts"), "src/a.ts");
/// ```
pub fn format_file_path(path: &str) -> String {
    path.trim_start_matches(['/', '\\']).to_string()
}

/// Renders a byte count with one decimal in the largest fitting unit, up to
/// megabytes.
///
/// # Examples
///
/// ```
/// use code_index::util::format_file_size;
///
/// assert_eq!(format_file_size(512), "512 B");
/// assert_eq!(format_file_size(2048), "2.0 KB");
/// assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_path_strips_leading_separators() {
        assert_eq!(format_file_path("/logo.png"), "logo.png");
        assert_eq!(format_file_path("///deep/root.txt"), "deep/root.txt");
        assert_eq!(format_file_path("\\win\\style.css"), "win\\style.css");
        // Interior separators are left alone.
        assert_eq!(format_file_path("src/components/App.tsx"), "src/components/App.tsx");
        assert_eq!(format_file_path(""), "");
    }

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(20 * 1024 * 1024), "20.0 MB");
    }
}
