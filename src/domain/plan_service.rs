//! Budget plan domain logic.
//!
//! The plan is explicit application state: loaded once at startup, edited
//! in memory, and persisted as a whole at the single commit point
//! (`save_plan`). Editing a plan before its commitment period has elapsed
//! charges penalty points; that is the one piece of friction the design
//! puts between the user and their own budget.

use anyhow::Result;
use chrono::Utc;
use log::{debug, info};

use crate::domain::calendar::current_epoch_month;
use crate::domain::commands::plan::{
    AddCategoryCommand, AddCategoryResult, SavePlanCommand, SavePlanResult,
};
use crate::domain::models::ledger::parse_or_zero;
use crate::domain::models::plan::{
    BudgetPlan, DEFAULT_COMMITMENT_MONTHS, EARLY_EDIT_PENALTY,
};
use crate::storage::traits::SettingsStore;

/// Service for loading and committing budget plans.
pub struct PlanService<S: SettingsStore> {
    settings: S,
}

impl<S: SettingsStore> PlanService<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    /// Load the persisted plan, seeding the default plan on first run.
    pub fn load_plan(&self) -> Result<BudgetPlan> {
        self.settings.load()
    }

    /// Add a user-defined category to the in-memory plan.
    ///
    /// Blank and duplicate names are silent no-ops. Nothing is persisted
    /// until the next `save_plan` commit.
    pub fn add_category(&self, plan: &mut BudgetPlan, command: AddCategoryCommand) -> AddCategoryResult {
        let name = command.name.trim();
        if name.is_empty() || plan.has_category(name) {
            debug!("Ignoring category '{}': blank or already present", command.name);
            return AddCategoryResult { added: false };
        }
        plan.categories.push(name.to_string());
        plan.budgets.insert(name.to_string(), 0.0);
        AddCategoryResult { added: true }
    }

    /// Commit a plan edit: parse the submitted budgets, restart the
    /// commitment period, and persist.
    ///
    /// Unparseable budget entries coerce to 0; an unparseable commitment
    /// length falls back to the default. Re-saving before the previous
    /// commitment elapsed charges penalty points.
    pub fn save_plan(&self, plan: &mut BudgetPlan, command: SavePlanCommand) -> Result<SavePlanResult> {
        let current_month = command.current_month.unwrap_or_else(current_epoch_month);

        let penalty_applied = plan.setup_complete && current_month < plan.commitment_end_month;
        if penalty_applied {
            plan.penalty_points += EARLY_EDIT_PENALTY;
            info!(
                "Plan edited before commitment end; penalty points now {}",
                plan.penalty_points
            );
        }

        for (category, input) in &command.budget_inputs {
            plan.budgets.insert(category.clone(), parse_or_zero(input));
        }

        let commitment_months = command
            .commitment_months_input
            .trim()
            .parse::<i64>()
            .unwrap_or(DEFAULT_COMMITMENT_MONTHS);
        plan.commitment_end_month = current_month + commitment_months;
        plan.setup_complete = true;
        plan.updated_at = Utc::now().to_rfc3339();

        self.settings.save(plan)?;
        info!(
            "Saved budget plan: {} categories, commitment through month {}",
            plan.categories.len(),
            plan.commitment_end_month
        );

        let success_message = if penalty_applied {
            "Budget plan updated; early-edit penalty accepted".to_string()
        } else {
            "Budget plan saved".to_string()
        };
        Ok(SavePlanResult {
            penalty_applied,
            success_message,
        })
    }
}
