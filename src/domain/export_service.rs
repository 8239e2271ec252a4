//! Compatibility export of the ledger as real CSV.
//!
//! The ledger's native format does no quoting, so it cannot carry a
//! category name containing a comma. The export writes the same table
//! (sorted categories, zero-padded rows) through a proper CSV writer,
//! which quotes whatever needs quoting.

use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::models::ledger::LedgerTable;

/// Outcome of an export to disk.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub rows_exported: usize,
}

/// Service that renders ledger tables as quoted CSV.
#[derive(Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Render the table as CSV text. An empty table renders as empty text.
    pub fn render_csv(&self, table: &LedgerTable) -> Result<String> {
        if table.is_empty() {
            return Ok(String::new());
        }
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(table.columns())?;
        for category in table.categories() {
            let mut record = vec![category.to_string()];
            record.extend(table.padded_values(category));
            writer.write_record(&record)?;
        }
        writer.flush()?;
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Write the rendered CSV to `path`, creating parent directories on
    /// demand and replacing the file atomically.
    pub fn export_to_path(&self, table: &LedgerTable, path: &Path) -> Result<ExportOutcome> {
        let content = self.render_csv(table)?;
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        let rows_exported = table.categories().count();
        info!("Exported {} ledger rows to {:?}", rows_exported, path);
        Ok(ExportOutcome {
            path: path.to_path_buf(),
            rows_exported,
        })
    }
}
