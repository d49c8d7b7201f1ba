use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expenses::cli::{
    handle_expense_command, handle_export_command, handle_history_command, report_warnings,
    ExpenseCommands, ExportFormat,
};
use expenses::config::paths::{DEFAULT_FILE_NAME, FILE_ENV_VAR};
use expenses::config::{ExpensePaths, Settings};
use expenses::services::ExpenseService;
use expenses::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Record, edit, delete and list your expenses from the command line. \
                  Everything is kept in a single local file."
)]
struct Cli {
    /// Expenses file to read and write
    #[arg(short, long, global = true, env = FILE_ENV_VAR, default_value = DEFAULT_FILE_NAME)]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Export all expenses
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new(cli.file);
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone());

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut service = ExpenseService::load(&storage, &settings);
            report_warnings(service.load_warnings());
            handle_expense_command(&mut service, &settings, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Export { format, output }) => {
            let service = ExpenseService::load(&storage, &settings);
            report_warnings(service.load_warnings());
            handle_export_command(&service, format, output)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Expenses file: {}", paths.data_file().display());
            println!("Settings file: {}", paths.settings_file().display());
            println!("Audit log:     {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit log:       {}", settings.audit_enabled);
            println!("  Show totals:     {}", settings.show_totals);
        }
        None => {
            println!("Expense Tracker");
            println!();
            println!("Usage:");
            println!("  expenses add <description> <amount> [category]");
            println!("  expenses update <id> <field> <value> [<field> <value> ...]");
            println!("  expenses delete <id>");
            println!("  expenses list-<general|food|entertainment|health|shopping|bills>");
            println!("  expenses list-all");
            println!();
            println!("Run 'expenses --help' for more information.");
        }
    }

    Ok(())
}
