//! Flat-file storage backend: a plain-text ledger plus a YAML settings
//! file under one data directory.

pub mod connection;
pub mod ledger_repository;
pub mod settings_repository;
#[cfg(test)]
pub mod test_utils;

pub use connection::FlatFileConnection;
pub use ledger_repository::LedgerRepository;
pub use settings_repository::SettingsRepository;
