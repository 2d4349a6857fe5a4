//! Expense service
//!
//! Provides business logic for expense management: parsing raw input, date
//! stamping, and the optional income re-record that can accompany a new
//! expense.

use chrono::{Local, NaiveDate};

use crate::error::{FinmanError, FinmanResult};
use crate::models::{validate_name, Amount, ExpenseId, ExpenseRecord, IncomeRecord};
use crate::storage::Storage;

use super::input::parse_amount;

/// Input for adding a new expense
#[derive(Debug, Clone, Default)]
pub struct AddExpenseInput {
    pub name: String,
    /// Raw amount as typed by the user
    pub amount: String,
    /// Defaults to today's local date
    pub date: Option<NaiveDate>,
    /// Raw income to record alongside the expense
    pub income: Option<String>,
}

impl AddExpenseInput {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn income(mut self, income: impl Into<String>) -> Self {
        self.income = Some(income.into());
        self
    }
}

/// Result of adding an expense
#[derive(Debug, Clone)]
pub struct AddedExpense {
    pub expense: ExpenseRecord,
    /// Income row written in the same action, if any
    pub income: Option<IncomeRecord>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    record_income_on_expense: bool,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            record_income_on_expense: false,
        }
    }

    /// Re-append the latest income whenever an expense is added without an
    /// explicit income
    pub fn record_income_on_expense(mut self, enabled: bool) -> Self {
        self.record_income_on_expense = enabled;
        self
    }

    /// Add a new expense
    ///
    /// All fields are parsed before anything is written. When an income is
    /// involved, the income row and the expense are stored in one
    /// transaction.
    pub fn add(&self, input: AddExpenseInput) -> FinmanResult<AddedExpense> {
        let amount = parse_amount("expense amount", &input.amount)?;
        let explicit_income = input
            .income
            .as_deref()
            .map(|raw| parse_amount("income", raw))
            .transpose()?;
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());

        let income = match explicit_income {
            Some(value) => Some(value),
            None if self.record_income_on_expense => {
                self.storage.income.latest()?.map(|r| r.amount)
            }
            None => None,
        };

        let added = match income {
            Some(income_amount) => {
                let (income, expense) = self.storage.add_expense_with_income(
                    &input.name,
                    amount,
                    date,
                    income_amount,
                )?;
                AddedExpense {
                    expense,
                    income: Some(income),
                }
            }
            None => AddedExpense {
                expense: self.storage.expenses.add(&input.name, amount, date)?,
                income: None,
            },
        };

        tracing::info!(
            id = %added.expense.id,
            %amount,
            with_income = added.income.is_some(),
            "added expense"
        );
        Ok(added)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> FinmanResult<ExpenseRecord> {
        self.storage
            .expenses
            .get(id)?
            .ok_or_else(|| FinmanError::expense_not_found(id.to_string()))
    }

    /// List all expenses in insertion order
    pub fn list(&self) -> FinmanResult<Vec<ExpenseRecord>> {
        self.storage.expenses.list()
    }

    /// Change the name and amount of an expense
    ///
    /// The name is trimmed and must not be empty.
    pub fn update(&self, id: ExpenseId, name: &str, raw_amount: &str) -> FinmanResult<ExpenseRecord> {
        let name = validate_name(name).map_err(|e| FinmanError::InvalidInput(e.to_string()))?;
        let amount = parse_amount("expense amount", raw_amount)?;

        self.storage.expenses.update(id, name, amount).map_err(|e| {
            if e.is_not_found() {
                tracing::warn!(%id, "update of missing expense");
            }
            e
        })?;
        tracing::info!(%id, %amount, "updated expense");

        self.get(id)
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> FinmanResult<()> {
        self.storage.expenses.delete(id).map_err(|e| {
            if e.is_not_found() {
                tracing::warn!(%id, "delete of missing expense");
            }
            e
        })?;
        tracing::info!(%id, "deleted expense");
        Ok(())
    }

    /// Sum of all expenses
    pub fn total(&self) -> FinmanResult<Amount> {
        self.storage.expenses.total()
    }
}
