//! Parsing helpers for raw user input

use chrono::{Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money};

/// Date format accepted for expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local date, the default expense date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an expense date; blank input means today
///
/// Past and future dates are both accepted.
pub fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse a category name (case-insensitive)
pub fn parse_category(input: &str) -> ExpenseResult<Category> {
    input.parse()
}

/// Parse a non-negative amount; `field` names the value in error messages
pub fn parse_amount(input: &str, field: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| ExpenseError::Validation(format!("{}: {}", field, e)))?;

    if amount.is_negative() {
        return Err(ExpenseError::Validation(format!(
            "{} must be at least 0, got {}",
            field, amount
        )));
    }

    Ok(amount)
}
