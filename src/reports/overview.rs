//! Overview Report
//!
//! Current income, total deducted, the remaining share of income, and the
//! expense list.

use crate::config::Settings;
use crate::display::expense::format_expense_table;
use crate::error::FinmanResult;
use crate::models::{Amount, ExpenseRecord};
use crate::services::{deducted, remaining_percent, ExpenseService, IncomeService};
use crate::storage::Storage;

/// Income vs. expenses at a glance
#[derive(Debug, Clone)]
pub struct OverviewReport {
    /// Latest income, zero if none was ever recorded
    pub income: Amount,
    /// Whether an income row exists at all
    pub income_recorded: bool,
    /// Sum of all expenses
    pub deducted: Amount,
    /// Share of income not yet deducted
    pub remaining_percent: f64,
    /// Expenses in insertion order
    pub expenses: Vec<ExpenseRecord>,
}

impl OverviewReport {
    /// Generate the overview from storage
    pub fn generate(storage: &Storage) -> FinmanResult<Self> {
        let income_service = IncomeService::new(storage);
        let expense_service = ExpenseService::new(storage);

        let current = income_service.current_income()?;
        let income = current.unwrap_or_default();
        let deducted = deducted(expense_service.total()?);

        Ok(Self {
            income,
            income_recorded: current.is_some(),
            deducted,
            remaining_percent: remaining_percent(income, deducted),
            expenses: expense_service.list()?,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Monthly Income Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.income_recorded {
            output.push_str(&format!("Monthly Income:  {:>15}\n", self.income));
        } else {
            output.push_str(&format!("Monthly Income:  {:>15}\n", "(not set)"));
        }
        output.push_str(&format!("Total Deducted:  {:>15}\n", self.deducted));
        output.push_str(&format!(
            "Remaining:       {:>15}\n",
            format!("{:.2}%", self.remaining_percent)
        ));
        output.push('\n');

        output.push_str(&format_expense_table(&self.expenses, settings));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    #[test]
    fn test_never_set_income_gives_zero_percent() {
        let storage = Storage::open_in_memory().unwrap();
        storage
            .expenses
            .add("Snacks", Amount::new(20.0), day())
            .unwrap();

        let report = OverviewReport::generate(&storage).unwrap();

        assert!(!report.income_recorded);
        assert_eq!(report.income, Amount::zero());
        assert_eq!(report.remaining_percent, 0.0);
        assert!(report
            .format_terminal(&Settings::default())
            .contains("(not set)"));
    }

    #[test]
    fn test_three_expense_scenario() {
        let storage = Storage::open_in_memory().unwrap();
        storage.income.record(Amount::new(2000.0)).unwrap();
        for amount in [100.0, 250.5, 49.5] {
            storage
                .expenses
                .add("item", Amount::new(amount), day())
                .unwrap();
        }

        let report = OverviewReport::generate(&storage).unwrap();
        assert_eq!(report.deducted.value(), 400.0);
        assert!((report.remaining_percent - 80.0).abs() < 1e-9);

        let text = report.format_terminal(&Settings::default());
        assert!(text.contains("400.00"));
        assert!(text.contains("80.00%"));
        assert!(text.contains("2000.00"));
    }

    #[test]
    fn test_empty_store_is_all_zero() {
        let storage = Storage::open_in_memory().unwrap();
        let report = OverviewReport::generate(&storage).unwrap();

        assert_eq!(report.deducted, Amount::zero());
        assert!(report.expenses.is_empty());
        assert!(report
            .format_terminal(&Settings::default())
            .contains("No expenses recorded."));
    }
}
