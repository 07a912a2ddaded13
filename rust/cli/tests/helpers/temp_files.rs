use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

#[derive(Debug)]
pub struct TempFileManager {
    base_dir: TempDir,
}

impl TempFileManager {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            base_dir: tempfile::Builder::new().prefix("pokerschool-cli").tempdir()?,
        })
    }

    /// Path under the temp dir; the file itself is not created.
    pub fn path(&self, name: &str) -> PathBuf {
        self.base_dir.path().join(name)
    }

    pub fn create_file(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, content)?;
        Ok(path)
    }
}
