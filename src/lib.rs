//! # Expense Tracker Core
//!
//! Non-UI logic for a single-user expense tracker: users define spending
//! categories and monthly budgets, log expenses per category, and read
//! running totals against budgets with a three-tier mood indicator.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//! ```text
//! UI layer (out of scope here)
//!     ↓
//! Domain layer (services, commands, models)
//!     ↓
//! Storage layer (flat-file ledger + YAML settings)
//! ```
//!
//! All state is explicit: [`AppState`] holds the loaded budget plan and the
//! services, and every operation is a synchronous request/response cycle.
//! There is no background work and no second writer.

pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use std::path::Path;

use crate::domain::models::plan::BudgetPlan;
use crate::domain::{ExpenseService, ExportService, PlanService, SummaryService};
use crate::storage::{FlatFileConnection, LedgerRepository, SettingsRepository};

/// Application state: the loaded budget plan plus the domain services.
///
/// Constructed once at startup. The plan is mutated in memory by plan
/// edits and persisted at their commit points; the ledger is owned by the
/// expense service's repository.
pub struct AppState {
    pub plan: BudgetPlan,
    pub expense_service: ExpenseService<LedgerRepository>,
    pub plan_service: PlanService<SettingsRepository>,
    pub summary_service: SummaryService,
    pub export_service: ExportService,
}

/// Initialize the application against a data directory.
pub fn initialize_app<P: AsRef<Path>>(data_directory: P) -> Result<AppState> {
    info!("Setting up storage");
    let connection = FlatFileConnection::new(data_directory)?;
    let ledger_repository = LedgerRepository::new(connection.clone());
    let settings_repository = SettingsRepository::new(connection);

    info!("Setting up domain services");
    let plan_service = PlanService::new(settings_repository);
    let plan = plan_service.load_plan()?;
    let expense_service = ExpenseService::new(ledger_repository);

    Ok(AppState {
        plan,
        expense_service,
        plan_service,
        summary_service: SummaryService::new(),
        export_service: ExportService::new(),
    })
}

/// Initialize the application in the default data directory.
pub fn initialize_default_app() -> Result<AppState> {
    info!("Setting up storage in default data directory");
    let connection = FlatFileConnection::new_default()?;
    let ledger_repository = LedgerRepository::new(connection.clone());
    let settings_repository = SettingsRepository::new(connection);

    let plan_service = PlanService::new(settings_repository);
    let plan = plan_service.load_plan()?;

    Ok(AppState {
        plan,
        expense_service: ExpenseService::new(ledger_repository),
        plan_service,
        summary_service: SummaryService::new(),
        export_service: ExportService::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::expenses::LogExpenseCommand;
    use crate::domain::commands::plan::SavePlanCommand;
    use crate::domain::summary_service::MoodIndicator;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn log(state: &mut AppState, category: &str, amount: &str, month: &str) -> Result<String> {
        let result = state.expense_service.log_expense(LogExpenseCommand {
            category: category.to_string(),
            amount_input: amount.to_string(),
            month: Some(month.to_string()),
        })?;
        Ok(result.ledger_text)
    }

    #[test]
    fn full_cycle_from_first_run_to_summary() -> Result<()> {
        let dir = TempDir::new()?;
        let mut state = initialize_app(dir.path())?;

        // First run: seeded plan, nothing logged.
        assert!(!state.plan.setup_complete);
        assert!(state.expense_service.ledger()?.is_empty());

        // Commit a plan.
        let mut plan = state.plan.clone();
        let budget_inputs: BTreeMap<String, String> = [
            ("Food".to_string(), "100".to_string()),
            ("Transportation".to_string(), "50".to_string()),
        ]
        .into();
        state.plan_service.save_plan(
            &mut plan,
            SavePlanCommand {
                budget_inputs,
                commitment_months_input: "3".to_string(),
                current_month: Some(24_300),
            },
        )?;
        state.plan = plan;

        // Log a few expenses and read the summaries.
        log(&mut state, "Food", "60", "January")?;
        log(&mut state, "Food", "35", "January")?;
        let text = log(&mut state, "Transportation", "50", "January")?;
        assert_eq!(text, "Category,January\nFood,95.0\nTransportation,50.0");

        let table = state.expense_service.ledger()?;
        let total = state.summary_service.month_total(&table, "January");
        assert_eq!(total, 145.0);
        assert_eq!(
            state.summary_service.mood(total, state.plan.total_budget()),
            MoodIndicator::Nervous
        );

        // Per-category: Food is near its budget, Transportation at 100%.
        let food = state
            .summary_service
            .category_month_progress(&table, &state.plan, "Food", "January")
            .unwrap();
        assert_eq!(food.ratio, 0.95);
        Ok(())
    }

    #[test]
    fn state_reloads_from_disk_between_runs() -> Result<()> {
        let dir = TempDir::new()?;
        {
            let mut state = initialize_app(dir.path())?;
            log(&mut state, "Groceries", "12.5", "March")?;
        }
        let state = initialize_app(dir.path())?;
        let table = state.expense_service.ledger()?;
        assert_eq!(table.month_total("March"), 12.5);
        Ok(())
    }
}
