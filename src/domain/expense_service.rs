//! Expense logging domain logic.
//!
//! Each logged expense is one full read-modify-write cycle over the ledger:
//! decode the persisted text, accumulate into the current month's cell for
//! the category, re-encode, persist. Input that fails validation is a
//! silent no-op by policy, never an error; nothing is created and nothing
//! is written.

use anyhow::Result;
use log::{debug, info};

use crate::domain::calendar::current_month_label;
use crate::domain::commands::expenses::{LogExpenseCommand, LogExpenseResult};
use crate::domain::models::ledger::LedgerTable;
use crate::storage::traits::LedgerStore;

/// Why a piece of expense input was ignored.
///
/// These are policy outcomes, not failures: the operation simply does not
/// run. They are typed so the policy itself is testable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseInputError {
    #[error("category name is empty")]
    EmptyCategory,
    #[error("amount is empty")]
    EmptyAmount,
    #[error("amount is not a plain decimal number")]
    MalformedAmount,
    #[error("amount is zero")]
    ZeroAmount,
}

/// Service that records expenses against the ledger.
pub struct ExpenseService<L: LedgerStore> {
    ledger: L,
}

impl<L: LedgerStore> ExpenseService<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// Record an expense amount into the month's cell for the category,
    /// creating the month column and/or category row on demand.
    ///
    /// Returns the encoded ledger text for immediate display refresh.
    /// Rejected input leaves the persisted ledger byte-identical, including
    /// the case where no ledger file exists yet.
    pub fn log_expense(&mut self, command: LogExpenseCommand) -> Result<LogExpenseResult> {
        let amount = match validate_expense_input(&command.category, &command.amount_input) {
            Ok(amount) => amount,
            Err(reason) => {
                debug!("Ignoring expense input for '{}': {}", command.category, reason);
                return Ok(LogExpenseResult {
                    recorded: false,
                    ledger_text: self.ledger.read_text()?,
                });
            }
        };
        let month = command.month.unwrap_or_else(current_month_label);
        let ledger_text = self.ledger.record_expense(&command.category, &month, amount)?;
        info!("Recorded {} against '{}' for {}", amount, command.category, month);
        Ok(LogExpenseResult {
            recorded: true,
            ledger_text,
        })
    }

    /// Decoded form of the persisted ledger, re-read from storage.
    pub fn ledger(&self) -> Result<LedgerTable> {
        self.ledger.load()
    }

    /// Raw persisted ledger text; empty when nothing was ever logged.
    pub fn ledger_text(&self) -> Result<String> {
        self.ledger.read_text()
    }
}

/// Validate raw expense input the way the entry field constrains it:
/// digits and at most one decimal point, non-blank, non-zero.
pub fn validate_expense_input(category: &str, amount_input: &str) -> Result<f64, ExpenseInputError> {
    if category.trim().is_empty() {
        return Err(ExpenseInputError::EmptyCategory);
    }
    let amount = amount_input.trim();
    if amount.is_empty() {
        return Err(ExpenseInputError::EmptyAmount);
    }
    let plain_decimal =
        amount.chars().all(|c| c.is_ascii_digit() || c == '.') && amount.matches('.').count() <= 1;
    if !plain_decimal {
        return Err(ExpenseInputError::MalformedAmount);
    }
    let amount: f64 = amount.parse().map_err(|_| ExpenseInputError::MalformedAmount)?;
    if amount == 0.0 {
        return Err(ExpenseInputError::ZeroAmount);
    }
    Ok(amount)
}
