//! File-system connection for the flat-file store.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Names and owns the data directory holding the ledger and settings files.
#[derive(Debug, Clone)]
pub struct FlatFileConnection {
    base_directory: PathBuf,
}

impl FlatFileConnection {
    /// Create a connection rooted at `base_directory`, creating the
    /// directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        if !base_directory.exists() {
            fs::create_dir_all(&base_directory)?;
        }
        Ok(Self { base_directory })
    }

    /// Create a connection in the default data directory under the user's
    /// Documents folder.
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Expense Tracker");
        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the ledger file. The file itself is created lazily on the
    /// first write; a missing file reads as an empty ledger.
    pub fn ledger_file_path(&self) -> PathBuf {
        self.base_directory.join("expenses.csv")
    }

    /// Path of the budget settings file.
    pub fn settings_file_path(&self) -> PathBuf {
        self.base_directory.join("budget_settings.yaml")
    }
}
