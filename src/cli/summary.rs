//! CLI commands for summaries
//!
//! `summary` prints the income/expense overview; `project` prints the savings
//! projection over a number of months.

use crate::config::Settings;
use crate::error::FinmanResult;
use crate::reports::{OverviewReport, ProjectionReport};
use crate::services::{check_months, parse_months};
use crate::storage::Storage;

/// Handle the `summary` command
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> FinmanResult<()> {
    let report = OverviewReport::generate(storage)?;
    print!("{}", report.format_terminal(settings));
    Ok(())
}

/// Handle the `project` command
pub fn handle_project_command(
    storage: &Storage,
    settings: &Settings,
    months: Option<String>,
) -> FinmanResult<()> {
    let months = match months {
        Some(raw) => parse_months(&raw, settings.max_months)?,
        None => check_months(settings.default_months, settings.max_months)?,
    };

    let report = ProjectionReport::generate(storage, months)?;
    print!("{}", report.format_terminal(settings));
    Ok(())
}
