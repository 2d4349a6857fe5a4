//! Income CLI commands

use clap::Subcommand;

use crate::display::format_income_history;
use crate::error::FinmanResult;
use crate::services::IncomeService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record the current monthly income
    Set {
        /// Income amount (e.g., "2000" or "2000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show the current monthly income
    Show,
    /// List every income entry ever recorded
    History,
}

/// Handle an income command
pub fn handle_income_command(storage: &Storage, cmd: IncomeCommands) -> FinmanResult<()> {
    let service = IncomeService::new(storage);

    match cmd {
        IncomeCommands::Set { amount } => {
            let record = service.record_income(&amount)?;
            println!("Monthly income set to {} ({})", record.amount, record.id);
        }

        IncomeCommands::Show => match service.current_income()? {
            Some(amount) => println!("Monthly income: {}", amount),
            None => {
                println!("No income recorded yet.");
                println!("Use 'finman income set <amount>' to record one.");
            }
        },

        IncomeCommands::History => {
            print!("{}", format_income_history(&service.history()?));
        }
    }

    Ok(())
}
