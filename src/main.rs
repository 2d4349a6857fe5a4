use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finman::cli::{
    handle_expense_command, handle_income_command, handle_project_command,
    handle_summary_command, ExpenseCommands, IncomeCommands,
};
use finman::config::{paths::FinmanPaths, settings::Settings};
use finman::storage::Storage;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "FINMAN_LOG";

#[derive(Parser)]
#[command(
    name = "finman",
    version,
    about = "Track monthly income and expenses from the terminal",
    long_about = "finman records your monthly income and individual expenses in a \
                  local SQLite database, and shows how much of your income is left \
                  and what you could save over the coming months."
)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show income, total deducted and remaining percentage
    Summary,

    /// Project savings over a number of months
    Project {
        /// Number of months (defaults to the configured value)
        #[arg(short, long)]
        months: Option<String>,
    },

    /// Create the data directory, database and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinmanPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings, cli.verbose);

    match cli.command {
        Some(Commands::Income(cmd)) => {
            let storage = Storage::open(&paths)?;
            handle_income_command(&storage, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            let storage = Storage::open(&paths)?;
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            let storage = Storage::open(&paths)?;
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::Project { months }) => {
            let storage = Storage::open(&paths)?;
            handle_project_command(&storage, &settings, months)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("finman is already initialized at: {}", paths.base_dir().display());
                Storage::open(&paths)?;
                return Ok(());
            }

            println!("Initializing finman at: {}", paths.base_dir().display());
            Storage::open(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'finman income set <amount>' to record your monthly income.");
        }
        Some(Commands::Config) => {
            println!("finman Configuration");
            println!("====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Database file:   {}", paths.database_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:          {}", settings.currency_symbol);
            println!("  Date format:              {}", settings.date_format);
            println!("  Default months:           {}", settings.default_months);
            println!("  Max months:               {}", settings.max_months);
            println!(
                "  Record income on expense: {}",
                settings.record_income_on_expense
            );
            println!("  Log level:                {}", settings.log_level);
        }
        None => {
            println!("finman - monthly income and expense tracker");
            println!();
            println!("Run 'finman --help' for usage information.");
        }
    }

    Ok(())
}

/// Install the stderr log subscriber
///
/// `--verbose` wins over `FINMAN_LOG`, which wins over the settings file.
fn init_logging(settings: &Settings, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("finman=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(format!("finman={}", settings.log_level)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
