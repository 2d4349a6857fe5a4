//! Income service
//!
//! Records income from raw user input and answers "what is the current
//! income".

use crate::error::FinmanResult;
use crate::models::{Amount, IncomeRecord};
use crate::storage::Storage;

use super::input::parse_amount;

/// Service for the income log
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse and append a new income entry
    pub fn record_income(&self, raw_amount: &str) -> FinmanResult<IncomeRecord> {
        let amount = parse_amount("income", raw_amount)?;
        let record = self.storage.income.record(amount)?;
        tracing::info!(id = %record.id, %amount, "recorded income");
        Ok(record)
    }

    /// The most recently recorded income, if any
    pub fn current_income(&self) -> FinmanResult<Option<Amount>> {
        Ok(self.storage.income.latest()?.map(|r| r.amount))
    }

    /// The current income, or zero when none has been recorded yet
    pub fn current_income_or_zero(&self) -> FinmanResult<Amount> {
        Ok(self.current_income()?.unwrap_or_default())
    }

    /// All income entries in the order they were recorded
    pub fn history(&self) -> FinmanResult<Vec<IncomeRecord>> {
        self.storage.income.history()
    }
}
