//! TUI dialogs

pub mod budget;
pub mod expense;
pub mod export;
pub mod help;
