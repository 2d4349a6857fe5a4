//! Expense record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::ExpenseId;

/// Validation errors for expense edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// One discrete expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Amount,
    /// Calendar date recorded when the expense was added
    pub date: NaiveDate,
}

impl ExpenseRecord {
    pub fn new(id: ExpenseId, name: impl Into<String>, amount: Amount, date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            date,
        }
    }
}

/// Trim an edited expense name and reject it when nothing is left
pub fn validate_name(name: &str) -> Result<&str, ExpenseValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ExpenseValidationError::EmptyName);
    }
    Ok(trimmed)
}
