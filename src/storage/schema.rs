//! Schema initialization
//!
//! Creates the income and expense tables on first run. Every statement is
//! `IF NOT EXISTS`, so this runs on every open.

use rusqlite::Connection;

use crate::error::FinmanError;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS income (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    amount REAL
);
CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    amount REAL,
    date TEXT
);
"#;

/// Create both tables if they are absent
pub fn init_schema(conn: &Connection) -> Result<(), FinmanError> {
    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| FinmanError::StorageUnavailable(format!("Failed to create schema: {}", e)))?;
    tracing::debug!("schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(conn: &Connection, table: &str) -> bool {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        count > 0
    }

    #[test]
    fn test_init_creates_tables() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn, "income"));

        init_schema(&conn).unwrap();

        assert!(table_exists(&conn, "income"));
        assert!(table_exists(&conn, "expenses"));
    }

    #[test]
    fn test_init_is_idempotent_and_keeps_rows() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute("INSERT INTO income (amount) VALUES (1500.0)", [])
            .unwrap();

        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM income", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
