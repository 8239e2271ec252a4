//! Flat-file ledger repository.
//!
//! The ledger persists as the plain comma-separated text the codec in
//! [`crate::domain::models::ledger`] reads and writes. Every mutation is a
//! full read-modify-write of the table, persisted with an atomic temp-file
//! rename so an interrupted write can lose an update but never corrupt the
//! file in place.

use anyhow::Result;
use log::debug;
use std::fs;

use super::connection::FlatFileConnection;
use crate::domain::models::ledger::LedgerTable;
use crate::storage::traits::LedgerStore;

/// Ledger store backed by a single flat text file.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    connection: FlatFileConnection,
}

impl LedgerRepository {
    pub fn new(connection: FlatFileConnection) -> Self {
        Self { connection }
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let path = self.connection.ledger_file_path();
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, text)?;
        fs::rename(&temp_path, &path)?;
        debug!("Wrote ledger file {:?}", path);
        Ok(())
    }
}

impl LedgerStore for LedgerRepository {
    fn read_text(&self) -> Result<String> {
        let path = self.connection.ledger_file_path();
        if !path.exists() {
            return Ok(String::new());
        }
        Ok(fs::read_to_string(&path)?)
    }

    fn load(&self) -> Result<LedgerTable> {
        Ok(LedgerTable::decode(&self.read_text()?))
    }

    fn record_expense(&mut self, category: &str, month: &str, amount: f64) -> Result<String> {
        let mut table = self.load()?;
        table.record(category, month, amount);
        let text = table.encode();
        self.write_text(&text)?;
        Ok(text)
    }

    fn replace(&mut self, table: &LedgerTable) -> Result<()> {
        self.write_text(&table.encode())
    }
}
