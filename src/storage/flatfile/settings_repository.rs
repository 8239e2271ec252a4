//! # Budget Settings Repository
//!
//! File-based storage for the budget plan, kept as a single YAML file
//! `budget_settings.yaml` at the root of the data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── budget_settings.yaml    ← this module manages this file
//! └── expenses.csv
//! ```
//!
//! ## Features
//!
//! - Load-or-create with the seeded first-run plan
//! - Atomic file writes with temp files
//! - Created/updated timestamps on the stored plan

use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

use super::connection::FlatFileConnection;
use crate::domain::models::plan::BudgetPlan;
use crate::storage::traits::SettingsStore;

/// Settings store backed by a YAML file.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    connection: FlatFileConnection,
}

impl SettingsRepository {
    pub fn new(connection: FlatFileConnection) -> Self {
        Self { connection }
    }

    fn settings_path(&self) -> PathBuf {
        self.connection.settings_file_path()
    }

    fn load_or_create(&self) -> Result<BudgetPlan> {
        let path = self.settings_path();
        if path.exists() {
            let yaml = fs::read_to_string(&path)?;
            let plan: BudgetPlan = serde_yaml::from_str(&yaml)?;
            debug!("Loaded budget settings from {:?}", path);
            Ok(plan)
        } else {
            let plan = BudgetPlan::default();
            self.write(&plan)?;
            info!("Created default budget settings at {:?}", path);
            Ok(plan)
        }
    }

    fn write(&self, plan: &BudgetPlan) -> Result<()> {
        let path = self.settings_path();
        let yaml = serde_yaml::to_string(plan)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml)?;
        fs::rename(&temp_path, &path)?;
        debug!("Saved budget settings to {:?}", path);
        Ok(())
    }
}

impl SettingsStore for SettingsRepository {
    fn load(&self) -> Result<BudgetPlan> {
        self.load_or_create()
    }

    fn save(&self, plan: &BudgetPlan) -> Result<()> {
        self.write(plan)
    }
}
