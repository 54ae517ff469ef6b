//! Input boundary and session mutation
//!
//! User input arrives as text from dialogs and command-line arguments. The
//! services parse and validate it (valid date, known category, amount of at
//! least zero) before touching the session, so the session itself never has
//! to reject anything.

pub mod budget;
pub mod expense;
pub mod input;

pub use budget::{BudgetInput, BudgetService};
pub use expense::{ExpenseInput, ExpenseService};
pub use input::{parse_amount, parse_category, parse_date, today, DATE_FORMAT};
