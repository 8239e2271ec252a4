//! Domain-level command and result types.
//!
//! These structs are the inputs and outputs of the domain services. A UI
//! layer maps its widget state onto these types; the services never see
//! widget state directly.

pub mod expenses {
    /// Input for logging a single expense amount.
    #[derive(Debug, Clone)]
    pub struct LogExpenseCommand {
        /// Target category name; blank makes the command a no-op.
        pub category: String,
        /// Raw amount text as typed. Blank, malformed, or zero input makes
        /// the command a no-op rather than an error.
        pub amount_input: String,
        /// Ledger month column to charge; defaults to the current month.
        pub month: Option<String>,
    }

    /// Result of logging an expense.
    #[derive(Debug, Clone)]
    pub struct LogExpenseResult {
        /// False when the input was rejected and nothing was written.
        pub recorded: bool,
        /// Encoded ledger text after the operation, for display refresh.
        pub ledger_text: String,
    }
}

pub mod plan {
    use std::collections::BTreeMap;

    /// Input for committing a budget plan edit.
    #[derive(Debug, Clone, Default)]
    pub struct SavePlanCommand {
        /// Raw budget text per category, as typed. Unparseable entries
        /// coerce to 0.
        pub budget_inputs: BTreeMap<String, String>,
        /// Raw commitment length in months; blank or unparseable falls back
        /// to the default.
        pub commitment_months_input: String,
        /// Epoch month index to treat as "now"; defaults to the wall clock.
        pub current_month: Option<i64>,
    }

    /// Result of committing a budget plan edit.
    #[derive(Debug, Clone)]
    pub struct SavePlanResult {
        /// True when the edit landed inside a commitment period and points
        /// were charged.
        pub penalty_applied: bool,
        pub success_message: String,
    }

    /// Input for adding a user-defined category.
    #[derive(Debug, Clone)]
    pub struct AddCategoryCommand {
        pub name: String,
    }

    /// Result of adding a category.
    #[derive(Debug, Clone)]
    pub struct AddCategoryResult {
        /// False when the name was blank or already present.
        pub added: bool,
    }
}
