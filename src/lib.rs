//! finman - terminal-based monthly income and expense tracker
//!
//! This library keeps an append-only log of declared monthly income and a
//! mutable list of expenses in a local SQLite database, and derives simple
//! summaries from them: total deducted, remaining percentage of income, and
//! projected savings over a number of months.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Income and expense records, amounts and ids
//! - `storage`: SQLite storage layer (schema and CRUD)
//! - `services`: Input parsing, business rules and summary calculations
//! - `reports`: Overview and projection reports
//! - `display`: Terminal tables
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use finman::services::{AddExpenseInput, ExpenseService, IncomeService};
//! use finman::storage::Storage;
//!
//! # fn main() -> Result<(), finman::FinmanError> {
//! let storage = Storage::open_in_memory()?;
//! IncomeService::new(&storage).record_income("2000")?;
//! ExpenseService::new(&storage).add(AddExpenseInput::new("Rent", "900"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinmanError, FinmanResult};
