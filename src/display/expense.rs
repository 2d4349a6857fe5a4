//! Expense display formatting

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{ExpenseRecord, IncomeRecord};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[ExpenseRecord], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        name: e.name.clone(),
        amount: e.amount.to_string(),
        date: format_date(e.date, &settings.date_format),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Format the income log, oldest first
pub fn format_income_history(history: &[IncomeRecord]) -> String {
    if history.is_empty() {
        return "No income recorded.\n".to_string();
    }

    let rows = history.iter().map(|r| IncomeRow {
        id: r.id.to_string(),
        amount: r.amount.to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Format a date with a user-supplied strftime pattern, falling back to ISO
/// when the pattern is invalid
fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// One-line description of an expense
pub fn format_expense_line(expense: &ExpenseRecord) -> String {
    format!(
        "{} {} {} ({})",
        expense.id,
        expense.name,
        expense.amount,
        expense.date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseId, IncomeId};

    fn expense(id: i64, name: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord::new(
            ExpenseId::from_raw(id),
            name,
            Amount::new(amount),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_expense_table(&[], &Settings::default()),
            "No expenses recorded.\n"
        );
        assert_eq!(format_income_history(&[]), "No income recorded.\n");
    }

    #[test]
    fn test_table_contents_and_order() {
        let table = format_expense_table(
            &[expense(2, "Rent", 900.0), expense(5, "Tea", 1.5)],
            &Settings::default(),
        );

        assert!(table.contains("Name"));
        assert!(table.contains("exp-2"));
        assert!(table.contains("900.00"));
        assert!(table.contains("1.50"));
        assert!(table.contains("2025-01-15"));
        assert!(table.find("Rent").unwrap() < table.find("Tea").unwrap());
    }

    #[test]
    fn test_date_format_setting() {
        let mut settings = Settings::default();
        settings.date_format = "%d/%m/%Y".into();
        let table = format_expense_table(&[expense(1, "Bus", 2.0)], &settings);
        assert!(table.contains("15/01/2025"));
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(format_date(date, "%Q"), "2025-01-15");
    }

    #[test]
    fn test_income_history() {
        let history = vec![IncomeRecord::new(IncomeId::from_raw(1), Amount::new(1500.0))];
        let table = format_income_history(&history);
        assert!(table.contains("inc-1"));
        assert!(table.contains("1500.00"));
    }

    #[test]
    fn test_expense_line() {
        assert_eq!(
            format_expense_line(&expense(3, "Gym", 30.0)),
            "exp-3 Gym 30.00 (2025-01-15)"
        );
    }
}
