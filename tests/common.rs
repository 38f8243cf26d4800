// tests/common.rs

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for pipeline tests. Dropping it removes the
/// tree.
#[allow(dead_code)] // Not every suite builds filesystem trees.
pub struct TestTree {
    dir: TempDir,
}

#[allow(dead_code)] // Helpers are used by many integration tests, but not all.
impl TestTree {
    pub fn new() -> anyhow::Result<Self> {
        init_logger();
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file under the tree root, creating parent directories as
    /// needed. `relative_path` uses forward slashes.
    pub fn create_file(&self, relative_path: &str, content: &str) -> anyhow::Result<PathBuf> {
        self.create_file_bytes(relative_path, content.as_bytes())
    }

    /// Same as `create_file`, for arbitrary bytes.
    pub fn create_file_bytes(
        &self,
        relative_path: &str,
        content: &[u8],
    ) -> anyhow::Result<PathBuf> {
        let file_path = self.dir.path().join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Creates an empty directory under the tree root.
    pub fn create_dir(&self, relative_path: &str) -> anyhow::Result<PathBuf> {
        let dir_path = self.dir.path().join(relative_path);
        fs::create_dir_all(&dir_path)?;
        Ok(dir_path)
    }
}

/// Installs the test logger once; RUST_LOG controls verbosity.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
