use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_categories_command, handle_config_command, handle_report_command, ReportArgs,
};
use expense_cli::config::{ExpensePaths, Settings};
use expense_cli::logging::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "expense-cli records expenses in five fixed categories, compares \
                  spending against monthly budgets and exports the ledger as CSV. \
                  Everything recorded in a session is discarded when it ends."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Print a one-shot report for the given expenses and budgets
    Report(ReportArgs),

    /// List the expense categories
    Categories,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            paths.ensure_directories()?;
            let log_file = paths.log_file();
            init_tracing(&settings.log_filter, LogTarget::File(&log_file));
            expense_cli::tui::run_tui(settings)?;
        }
        Some(Commands::Report(args)) => {
            init_tracing(&settings.log_filter, LogTarget::Stderr);
            handle_report_command(args, &settings)?;
        }
        Some(Commands::Categories) => {
            init_tracing(&settings.log_filter, LogTarget::Stderr);
            handle_categories_command()?;
        }
        Some(Commands::Config { init }) => {
            init_tracing(&settings.log_filter, LogTarget::Stderr);
            handle_config_command(&paths, &settings, init)?;
        }
    }

    Ok(())
}
