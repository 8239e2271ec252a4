//! Budget plan state: the user's categories, per-category budgets, and the
//! commitment bookkeeping that charges penalty points for early edits.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Categories seeded on first run.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Groceries", "Transportation", "Utilities"];

/// Penalty points charged for saving the plan before the commitment ends.
pub const EARLY_EDIT_PENALTY: u32 = 10;

/// Commitment length, in months, used when the submitted value is blank or
/// unparseable.
pub const DEFAULT_COMMITMENT_MONTHS: i64 = 3;

/// The explicit application state behind the budget screen.
///
/// Loaded once at startup, mutated by edit operations, and persisted as a
/// whole at a single commit point (`PlanService::save_plan`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    /// False until the user saves their first plan.
    pub setup_complete: bool,
    /// Epoch month index (year * 12 + month) after which plan edits stop
    /// incurring penalty points.
    pub commitment_end_month: i64,
    /// Points accumulated by editing the plan inside a commitment period.
    pub penalty_points: u32,
    /// Display order of categories; names are unique, free-form user text.
    pub categories: Vec<String>,
    /// Budget per category. Missing or non-positive means unbudgeted.
    pub budgets: BTreeMap<String, f64>,
    /// When the plan file was first created (RFC 3339).
    pub created_at: String,
    /// When the plan was last saved (RFC 3339).
    pub updated_at: String,
}

impl Default for BudgetPlan {
    fn default() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            setup_complete: false,
            commitment_end_month: 0,
            penalty_points: 0,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            budgets: DEFAULT_CATEGORIES.iter().map(|c| (c.to_string(), 0.0)).collect(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl BudgetPlan {
    /// Budget for a category; 0.0 when none was ever set.
    pub fn budget_for(&self, category: &str) -> f64 {
        self.budgets.get(category).copied().unwrap_or(0.0)
    }

    /// Sum of all category budgets.
    pub fn total_budget(&self) -> f64 {
        self.budgets.values().sum()
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_plan_seeds_default_categories_with_zero_budgets() {
        let plan = BudgetPlan::default();
        assert!(!plan.setup_complete);
        assert_eq!(plan.penalty_points, 0);
        assert_eq!(plan.categories, DEFAULT_CATEGORIES);
        for category in DEFAULT_CATEGORIES {
            assert_eq!(plan.budget_for(category), 0.0);
        }
        assert_eq!(plan.total_budget(), 0.0);
    }

    #[test]
    fn budget_for_unknown_category_is_zero() {
        let plan = BudgetPlan::default();
        assert_eq!(plan.budget_for("Travel"), 0.0);
    }

    #[test]
    fn total_budget_sums_all_categories() {
        let mut plan = BudgetPlan::default();
        plan.budgets.insert("Food".to_string(), 300.0);
        plan.budgets.insert("Utilities".to_string(), 150.0);
        assert_eq!(plan.total_budget(), 450.0);
    }
}
