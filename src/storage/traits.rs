//! # Storage Traits
//!
//! Abstractions that let the domain layer work against any persistence
//! backend. Mutating ledger operations take `&mut self`: the ledger has a
//! single writer by construction, and the borrow checker enforces it.

use anyhow::Result;

use crate::domain::models::ledger::LedgerTable;
use crate::domain::models::plan::BudgetPlan;

/// Keyed store over the persisted expense ledger.
pub trait LedgerStore {
    /// Raw persisted ledger text. A store that was never written to reads
    /// as empty text.
    fn read_text(&self) -> Result<String>;

    /// Decoded table form of the persisted ledger.
    fn load(&self) -> Result<LedgerTable>;

    /// Accumulate `amount` into the `(category, month)` cell and persist
    /// the whole table. Returns the encoded text after the write.
    fn record_expense(&mut self, category: &str, month: &str, amount: f64) -> Result<String>;

    /// Replace the persisted ledger with `table` in encoded form.
    fn replace(&mut self, table: &LedgerTable) -> Result<()>;
}

/// Store for the budget plan settings.
pub trait SettingsStore {
    /// Load the persisted plan, creating the default plan on first use.
    fn load(&self) -> Result<BudgetPlan>;

    /// Persist the plan in full.
    fn save(&self, plan: &BudgetPlan) -> Result<()>;
}
