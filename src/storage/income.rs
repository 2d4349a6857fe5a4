//! Income log repository
//!
//! Income rows are only ever appended; nothing here updates or deletes them.

use rusqlite::{Connection, OptionalExtension, Row};

use crate::error::FinmanError;
use crate::models::{Amount, IncomeId, IncomeRecord};

use super::{ensure_finite, lock, SharedConnection};

/// Repository for the append-only income log
pub struct IncomeRepository {
    conn: SharedConnection,
}

impl IncomeRepository {
    /// Create a new repository over the shared connection
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Get the most recently recorded income, if any
    pub fn latest(&self) -> Result<Option<IncomeRecord>, FinmanError> {
        let conn = lock(&self.conn)?;
        let record = conn
            .query_row(
                "SELECT id, amount FROM income ORDER BY id DESC LIMIT 1",
                [],
                map_income_row,
            )
            .optional()?;
        Ok(record)
    }

    /// Append a new income row
    pub fn record(&self, amount: Amount) -> Result<IncomeRecord, FinmanError> {
        ensure_finite("income", amount)?;
        let conn = lock(&self.conn)?;
        Ok(insert_income(&conn, amount)?)
    }

    /// Get every income row in the order it was recorded
    pub fn history(&self) -> Result<Vec<IncomeRecord>, FinmanError> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare("SELECT id, amount FROM income ORDER BY id")?;
        let rows = stmt.query_map([], map_income_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Count recorded income rows
    pub fn count(&self) -> Result<usize, FinmanError> {
        let conn = lock(&self.conn)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM income", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Insert an income row on an already locked connection or open transaction
pub(super) fn insert_income(conn: &Connection, amount: Amount) -> rusqlite::Result<IncomeRecord> {
    conn.execute("INSERT INTO income (amount) VALUES (?1)", [amount])?;
    let id = IncomeId::from_raw(conn.last_insert_rowid());
    tracing::debug!(%id, %amount, "inserted income row");
    Ok(IncomeRecord::new(id, amount))
}

fn map_income_row(row: &Row<'_>) -> rusqlite::Result<IncomeRecord> {
    Ok(IncomeRecord::new(row.get(0)?, row.get(1)?))
}
