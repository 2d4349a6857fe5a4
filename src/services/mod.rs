//! Service layer for finman
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input parsing, validation, and the summary calculations.

pub mod expense;
pub mod income;
pub mod input;
pub mod summary;

pub use expense::{AddExpenseInput, AddedExpense, ExpenseService};
pub use income::IncomeService;
pub use input::{check_months, parse_amount, parse_date, parse_expense_id, parse_months};
pub use summary::{deducted, projected_summary, remaining_percent, ProjectedSummary};
