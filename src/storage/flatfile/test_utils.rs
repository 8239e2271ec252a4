//! Test infrastructure for the flat-file store.
//!
//! RAII-based cleanup: the temporary data directory lives as long as the
//! [`TestEnvironment`] and is removed when it drops, even if a test panics.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::connection::FlatFileConnection;

/// Test environment that automatically cleans up on drop.
pub struct TestEnvironment {
    /// Kept alive to delay cleanup until drop.
    _temp_dir: TempDir,
    /// Connection rooted in the temporary directory.
    pub connection: FlatFileConnection,
    base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = FlatFileConnection::new(&base_path)?;
        Ok(Self {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.connection.ledger_file_path()
    }

    pub fn settings_path(&self) -> PathBuf {
        self.connection.settings_file_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_cleans_up_on_drop() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_directory().to_path_buf();
            assert!(base_path.exists());
            std::fs::write(env.ledger_path(), "Category,January\nFood,1.0")?;
        }
        assert!(!base_path.exists());
        Ok(())
    }
}
