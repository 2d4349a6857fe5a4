//! SQLite conversions for model types
//!
//! Amounts are bound as `REAL` and ids as `INTEGER`. Dates go through
//! rusqlite's chrono support, which stores `NaiveDate` as `YYYY-MM-DD` text.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::models::{Amount, AmountParseError, ExpenseId, IncomeId};

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = self.value();
        if !value.is_finite() {
            // SQLite would silently turn NaN into NULL
            return Err(rusqlite::Error::ToSqlConversionFailure(Box::new(
                AmountParseError::NotFinite(value.to_string()),
            )));
        }
        Ok(ToSqlOutput::from(value))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = f64::column_result(value)?;
        if raw.is_finite() {
            Ok(Amount::new(raw))
        } else {
            Err(FromSqlError::OutOfRange(0))
        }
    }
}

macro_rules! id_sql {
    ($name:ident) => {
        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.get()))
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map($name::from_raw)
            }
        }
    };
}

id_sql!(IncomeId);
id_sql!(ExpenseId);
