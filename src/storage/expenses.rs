//! Expense repository
//!
//! CRUD over the `expenses` table. Listing returns rows in insertion order;
//! update and delete report `NotFound` when no row matched.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::FinmanError;
use crate::models::{Amount, ExpenseId, ExpenseRecord};

use super::{ensure_finite, lock, SharedConnection};

/// Repository for expense records
pub struct ExpenseRepository {
    conn: SharedConnection,
}

impl ExpenseRepository {
    /// Create a new repository over the shared connection
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Get all expenses in insertion order
    pub fn list(&self) -> Result<Vec<ExpenseRecord>, FinmanError> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare("SELECT id, name, amount, date FROM expenses ORDER BY id")?;
        let rows = stmt.query_map([], map_expense_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<ExpenseRecord>, FinmanError> {
        let conn = lock(&self.conn)?;
        let record = conn
            .query_row(
                "SELECT id, name, amount, date FROM expenses WHERE id = ?1",
                [id],
                map_expense_row,
            )
            .optional()?;
        Ok(record)
    }

    /// Insert a new expense and return it with its fresh ID
    pub fn add(
        &self,
        name: &str,
        amount: Amount,
        date: NaiveDate,
    ) -> Result<ExpenseRecord, FinmanError> {
        ensure_finite("expense", amount)?;
        let conn = lock(&self.conn)?;
        Ok(insert_expense(&conn, name, amount, date)?)
    }

    /// Update the name and amount of an existing expense
    ///
    /// The date and ID are left unchanged.
    pub fn update(&self, id: ExpenseId, name: &str, amount: Amount) -> Result<(), FinmanError> {
        ensure_finite("expense", amount)?;
        let conn = lock(&self.conn)?;
        let changed = conn.execute(
            "UPDATE expenses SET name = ?1, amount = ?2 WHERE id = ?3",
            params![name, amount, id],
        )?;
        if changed == 0 {
            return Err(FinmanError::expense_not_found(id.to_string()));
        }
        tracing::debug!(%id, "updated expense row");
        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> Result<(), FinmanError> {
        let conn = lock(&self.conn)?;
        let changed = conn.execute("DELETE FROM expenses WHERE id = ?1", [id])?;
        if changed == 0 {
            return Err(FinmanError::expense_not_found(id.to_string()));
        }
        tracing::debug!(%id, "deleted expense row");
        Ok(())
    }

    /// Sum of all expense amounts, zero when there are none
    pub fn total(&self) -> Result<Amount, FinmanError> {
        let conn = lock(&self.conn)?;
        // SUM over zero rows is NULL
        let total: Option<f64> =
            conn.query_row("SELECT SUM(amount) FROM expenses", [], |row| row.get(0))?;
        Ok(Amount::new(total.unwrap_or(0.0)))
    }

    /// Count stored expenses
    pub fn count(&self) -> Result<usize, FinmanError> {
        let conn = lock(&self.conn)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Insert an expense row on an already locked connection or open transaction
pub(super) fn insert_expense(
    conn: &Connection,
    name: &str,
    amount: Amount,
    date: NaiveDate,
) -> rusqlite::Result<ExpenseRecord> {
    conn.execute(
        "INSERT INTO expenses (name, amount, date) VALUES (?1, ?2, ?3)",
        params![name, amount, date],
    )?;
    let id = ExpenseId::from_raw(conn.last_insert_rowid());
    tracing::debug!(%id, %amount, "inserted expense row");
    Ok(ExpenseRecord::new(id, name, amount, date))
}

fn map_expense_row(row: &Row<'_>) -> rusqlite::Result<ExpenseRecord> {
    Ok(ExpenseRecord {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        amount: row.get(2)?,
        date: row.get(3)?,
    })
}
