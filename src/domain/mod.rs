//! # Domain Module
//!
//! Business logic for the expense tracker, independent of any UI framework
//! or storage mechanism.
//!
//! ## Module Organization
//!
//! - **expense_service**: logging expenses into the monthly ledger
//! - **summary_service**: month totals, budget progress, mood classification
//! - **plan_service**: budget plan edits, commitment periods, penalties
//! - **export_service**: quoted CSV export of the ledger
//! - **calendar**: month labels and epoch month arithmetic
//! - **commands**: command/result types consumed by the services
//! - **models**: the ledger table codec and the budget plan state
//!
//! ## Key Rules
//!
//! - Every expense write is a full decode → mutate → encode → persist cycle
//! - Malformed numeric fields coerce to zero; they are never an error
//! - Blank or invalid user input is a silent no-op, not a failure
//! - The budget plan persists only at its explicit commit point

pub mod calendar;
pub mod commands;
pub mod expense_service;
pub mod export_service;
pub mod models;
pub mod plan_service;
pub mod summary_service;

pub use expense_service::*;
pub use export_service::*;
pub use plan_service::*;
pub use summary_service::*;
