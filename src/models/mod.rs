//! Core data models for finman
//!
//! This module contains the data structures stored by the application:
//! income log entries, expenses, and the amount and id types they share.

pub mod amount;
pub mod expense;
pub mod ids;
pub mod income;

pub use amount::{Amount, AmountParseError};
pub use expense::{validate_name, ExpenseRecord, ExpenseValidationError};
pub use ids::{ExpenseId, IncomeId};
pub use income::IncomeRecord;
