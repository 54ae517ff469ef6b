//! CLI command handlers
//!
//! Bridges clap argument parsing with the session, reports and display
//! layers.

pub mod config;
pub mod report;

pub use config::{format_config, handle_categories_command, handle_config_command};
pub use report::{build_session, handle_report_command, run_report, ReportArgs};
