//! Expense CLI commands
//!
//! Implements CLI commands for adding, listing, editing and deleting
//! expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_line, format_expense_table};
use crate::error::FinmanResult;
use crate::reports::OverviewReport;
use crate::services::{parse_date, parse_expense_id, AddExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Expense name
        name: String,
        /// Amount (e.g., "49.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Also record this monthly income in the same step
        #[arg(short, long, allow_hyphen_values = true)]
        income: Option<String>,
    },
    /// List all expenses
    #[command(alias = "ls")]
    List,
    /// Change the name and amount of an expense
    Edit {
        /// Expense ID (e.g., "3" or "exp-3")
        id: String,
        /// New name
        name: String,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (e.g., "3" or "exp-3")
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinmanResult<()> {
    let service = ExpenseService::new(storage)
        .record_income_on_expense(settings.record_income_on_expense);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            date,
            income,
        } => {
            let mut input = AddExpenseInput::new(name, amount);
            if let Some(date) = date {
                input = input.date(parse_date(&date)?);
            }
            if let Some(income) = income {
                input = input.income(income);
            }

            let added = service.add(input)?;
            println!("Added expense: {}", format_expense_line(&added.expense));
            if let Some(income) = added.income {
                println!("Recorded monthly income: {}", income.amount);
            }
            print_totals(storage)?;
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_table(&service.list()?, settings));
        }

        ExpenseCommands::Edit { id, name, amount } => {
            let id = parse_expense_id(&id)?;
            let updated = service.update(id, &name, &amount)?;
            println!("Updated expense: {}", format_expense_line(&updated));
            print_totals(storage)?;
        }

        ExpenseCommands::Delete { id, force } => {
            let id = parse_expense_id(&id)?;
            let expense = service.get(id)?;

            if !force {
                println!("About to delete expense:");
                println!("  {}", format_expense_line(&expense));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            service.delete(id)?;
            println!("Deleted expense: {}", format_expense_line(&expense));
            print_totals(storage)?;
        }
    }

    Ok(())
}

/// Print the deducted total and remaining share after a change
fn print_totals(storage: &Storage) -> FinmanResult<()> {
    let overview = OverviewReport::generate(storage)?;
    println!(
        "Total deducted: {}  Remaining: {:.2}%",
        overview.deducted, overview.remaining_percent
    );
    Ok(())
}
