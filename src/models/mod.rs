//! Core data models for the expense tracker
//!
//! Categories, money amounts, expense records and calendar months.

pub mod category;
pub mod expense;
pub mod money;
pub mod month;

pub use category::{Category, CategoryMap};
pub use expense::ExpenseRecord;
pub use money::{Money, MoneyParseError};
pub use month::Month;
