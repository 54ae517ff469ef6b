//! Terminal User Interface module
//!
//! The interactive dashboard, built on ratatui. It owns one session for its
//! lifetime: budget settings in the sidebar, expense history, monthly summary
//! and charts in the main panel, and dialogs for data entry and export.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
