use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::TestError;

/// Test environment rooted in a temp directory.
///
/// The layout mirrors a deployed bot:
///
/// ```text
/// <root>/
///   metadata.json
///   .env
///   logs/
/// ```
///
/// The directory and everything in it is removed when the context is dropped.
pub struct TestContext {
    dir: TempDir,
    metadata_path: PathBuf,
    dotenv_path: PathBuf,
    log_root: PathBuf,
}

impl TestContext {
    /// Creates an empty test directory.
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let metadata_path = dir.path().join("metadata.json");
        let dotenv_path = dir.path().join(".env");
        let log_root = dir.path().join("logs");

        Ok(Self {
            dir,
            metadata_path,
            dotenv_path,
            log_root,
        })
    }

    /// Root of the test directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn metadata_path(&self) -> &Path {
        &self.metadata_path
    }

    pub fn dotenv_path(&self) -> &Path {
        &self.dotenv_path
    }

    /// Directory to use as the log root; not created until a logger opens it.
    pub fn log_root(&self) -> &Path {
        &self.log_root
    }
}
