// src/config.rs

//! Configuration for the traversal engine.

use crate::constants::MAX_FILE_SIZE;

/// Options controlling a single walk.
///
/// # Examples
///
/// ```
/// use code_index::config::ProcessConfig;
///
/// let config = ProcessConfig::default();
/// assert_eq!(config.max_file_size, 20 * 1024 * 1024);
///
/// let small = ProcessConfig { max_file_size: 512 };
/// assert_eq!(small.max_file_size, 512);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProcessConfig {
    /// Maximum file size in bytes. Files larger than this are counted and
    /// skipped without being read.
    pub max_file_size: u64,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }
}
