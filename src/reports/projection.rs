//! Projection Report
//!
//! Estimates savings over a number of months, assuming the current income
//! repeats every month and all recorded expenses are already spent.

use crate::config::Settings;
use crate::error::FinmanResult;
use crate::services::{projected_summary, ExpenseService, IncomeService, ProjectedSummary};
use crate::storage::Storage;

/// Savings projection
#[derive(Debug, Clone)]
pub struct ProjectionReport {
    pub summary: ProjectedSummary,
}

impl ProjectionReport {
    /// Generate the projection for `months` months
    pub fn generate(storage: &Storage, months: u32) -> FinmanResult<Self> {
        let income = IncomeService::new(storage).current_income_or_zero()?;
        let total = ExpenseService::new(storage).total()?;

        Ok(Self {
            summary: projected_summary(income, months, total),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let s = &self.summary;

        let mut output = String::new();
        output.push_str(&format!("Summary for {} month(s):\n\n", s.months));
        output.push_str(&format!(
            "Total Expenses: {}\n",
            s.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Avg Monthly Expense: {}\n",
            s.avg_monthly_expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Estimated Savings: {}\n",
            s.estimated_savings.format_with_symbol(symbol)
        ));
        output
    }
}
