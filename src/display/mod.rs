//! Display formatting for terminal output
//!
//! Tables and one-line summaries for expenses and the income log.

pub mod expense;

pub use expense::{format_expense_line, format_expense_table, format_income_history};
