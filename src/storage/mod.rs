//! Storage layer for finman
//!
//! Owns the single SQLite connection and every statement run against it. The
//! connection sits behind a mutex that each repository call holds for the
//! whole operation, so writes are serialized and every read observes all
//! earlier writes.

pub mod expenses;
pub mod income;
pub mod schema;
mod sql_types;

pub use expenses::ExpenseRepository;
pub use income::IncomeRepository;
pub use schema::init_schema;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::config::paths::FinmanPaths;
use crate::error::FinmanError;
use crate::models::{Amount, ExpenseRecord, IncomeRecord};

/// Connection shared by the repositories
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Lock the shared connection, surfacing a poisoned mutex as a storage error
pub(crate) fn lock(conn: &SharedConnection) -> Result<MutexGuard<'_, Connection>, FinmanError> {
    conn.lock()
        .map_err(|e| FinmanError::StorageUnavailable(format!("Failed to acquire connection: {}", e)))
}

/// Refuse amounts SQLite cannot hold as `REAL`
///
/// NaN is stored as NULL, which would make every later read of the row fail.
pub(crate) fn ensure_finite(field: &str, amount: Amount) -> Result<(), FinmanError> {
    if amount.value().is_finite() {
        Ok(())
    } else {
        tracing::warn!(field, value = amount.value(), "refused non-finite amount");
        Err(FinmanError::InvalidInput(format!(
            "Invalid {} value: '{}' is not a finite number",
            field,
            amount.value()
        )))
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    conn: SharedConnection,
    location: Option<PathBuf>,
    pub income: IncomeRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Open the database under the configured data directory
    pub fn open(paths: &FinmanPaths) -> Result<Self, FinmanError> {
        paths.ensure_directories()?;
        Self::open_file(&paths.database_file())
    }

    /// Open (creating if missing) a database file at an explicit path
    pub fn open_file(path: &Path) -> Result<Self, FinmanError> {
        let conn = Connection::open(path).map_err(|e| {
            FinmanError::StorageUnavailable(format!("Failed to open {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "opened database");
        Self::from_connection(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self, FinmanError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, None)
    }

    fn from_connection(conn: Connection, location: Option<PathBuf>) -> Result<Self, FinmanError> {
        init_schema(&conn)?;
        let conn = Arc::new(Mutex::new(conn));

        Ok(Self {
            income: IncomeRepository::new(Arc::clone(&conn)),
            expenses: ExpenseRepository::new(Arc::clone(&conn)),
            location,
            conn,
        })
    }

    /// Path of the backing file, `None` for in-memory databases
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Insert an expense and an income row together
    ///
    /// Both rows are written in one transaction; if either insert fails
    /// neither is kept.
    pub fn add_expense_with_income(
        &self,
        name: &str,
        amount: Amount,
        date: NaiveDate,
        income_amount: Amount,
    ) -> Result<(IncomeRecord, ExpenseRecord), FinmanError> {
        ensure_finite("expense", amount)?;
        ensure_finite("income", income_amount)?;

        let mut conn = lock(&self.conn)?;
        let tx = conn.transaction()?;
        let income = income::insert_income(&tx, income_amount)?;
        let expense = expenses::insert_expense(&tx, name, amount, date)?;
        tx.commit()?;
        Ok((income, expense))
    }
}
