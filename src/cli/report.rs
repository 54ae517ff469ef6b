//! One-shot report command
//!
//! Builds a session from command-line arguments, prints the dashboard as
//! tables and optionally writes the CSV export. The session is discarded
//! when the command returns.

use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::display::format_dashboard;
use crate::error::ExpenseResult;
use crate::export::ExportArtifact;
use crate::reports::Dashboard;
use crate::services::{BudgetInput, BudgetService, ExpenseInput, ExpenseService};
use crate::session::Session;

/// Arguments for `expense report`
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Record an expense (repeatable), e.g. 2024-01-05,Food,20
    #[arg(short, long = "expense", value_name = "DATE,CATEGORY,AMOUNT")]
    pub expenses: Vec<ExpenseInput>,

    /// Set a monthly budget (repeatable), e.g. Food=500
    #[arg(short, long = "budget", value_name = "CATEGORY=LIMIT")]
    pub budgets: Vec<BudgetInput>,

    /// Write the expenses as CSV to this file (or into this directory)
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

/// Build a session from the arguments
pub fn build_session(args: &ReportArgs) -> Session {
    let mut session = Session::new();

    let mut budget_service = BudgetService::new(&mut session);
    for budget in &args.budgets {
        budget_service.set_limit(*budget);
    }

    let mut expense_service = ExpenseService::new(&mut session);
    for expense in &args.expenses {
        expense_service.add(*expense);
    }

    session
}

/// Run the report and return the text to print
pub fn run_report(args: &ReportArgs, settings: &Settings) -> ExpenseResult<String> {
    let session = build_session(args);
    let mut output = format_dashboard(&Dashboard::generate(&session), &settings.currency_symbol);

    if let Some(target) = &args.export {
        let path = export_path(target, &settings.export_file_name);
        let artifact = ExportArtifact::expenses_csv(&session, file_name_of(&path, settings))?;
        artifact.write_to(&path)?;
        output.push_str(&format!(
            "Exported {} expense(s) to {}\n",
            artifact.row_count(),
            path.display()
        ));
    }

    Ok(output)
}

/// Handle `expense report`
pub fn handle_report_command(args: ReportArgs, settings: &Settings) -> ExpenseResult<()> {
    print!("{}", run_report(&args, settings)?);
    Ok(())
}

fn export_path(target: &Path, default_file_name: &str) -> PathBuf {
    if target.is_dir() {
        target.join(default_file_name)
    } else {
        target.to_path_buf()
    }
}

fn file_name_of(path: &Path, settings: &Settings) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| settings.export_file_name.clone())
}
