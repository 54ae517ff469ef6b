//! expense-cli - Terminal-based personal expense tracker
//!
//! This library provides the core of a single-session expense tracker: an
//! append-only ledger of expenses in five fixed categories, a monthly budget
//! per category, the aggregations behind the dashboard and a CSV export.
//! Nothing is persisted between runs except user settings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core value types (categories, money, months, expense records)
//! - `session`: The ledger and budget store owned by one session
//! - `services`: Input validation and session mutation
//! - `reports`: Aggregations derived from the session on every read
//! - `export`: CSV export artifact
//! - `display`: Plain-text tables for the command-line report
//! - `tui`: Interactive terminal dashboard
//! - `cli`: Command-line handlers
//! - `config`: Configuration and path management
//! - `logging`: Tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use expense_cli::models::{Category, Money};
//! use expense_cli::reports::global_metrics;
//! use expense_cli::session::Session;
//!
//! let mut session = Session::new();
//! session.set_limit(Category::Food, Money::from_dollars(500));
//!
//! let metrics = global_metrics(&session);
//! assert_eq!(metrics.remaining, Money::from_dollars(500));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
