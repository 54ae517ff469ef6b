//! Expense service
//!
//! Validates expense input and appends it to the session ledger.

use chrono::NaiveDate;
use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money};
use crate::session::Session;

use super::input::{parse_amount, parse_category, parse_date};

/// A validated expense, ready to append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Money,
}

impl ExpenseInput {
    /// Validate the three raw form fields
    pub fn from_fields(date: &str, category: &str, amount: &str) -> ExpenseResult<Self> {
        Ok(Self {
            date: parse_date(date)?,
            category: parse_category(category)?,
            amount: parse_amount(amount, "Amount")?,
        })
    }
}

/// Parses `DATE,CATEGORY,AMOUNT` (the command-line form)
impl FromStr for ExpenseInput {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        match parts.as_slice() {
            [date, category, amount] => Self::from_fields(date, category, amount),
            _ => Err(ExpenseError::Validation(format!(
                "Expected DATE,CATEGORY,AMOUNT but got '{}'",
                s
            ))),
        }
    }
}

/// Service for recording expenses
pub struct ExpenseService<'a> {
    session: &'a mut Session,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Append an already validated expense
    pub fn add(&mut self, input: ExpenseInput) {
        self.session
            .add_expense(input.date, input.category, input.amount);
        tracing::info!(
            date = %input.date,
            category = %input.category,
            amount = %input.amount,
            count = self.session.ledger().len(),
            "expense added"
        );
    }

    /// Validate raw form fields and append the expense
    ///
    /// On error the ledger is left unchanged.
    pub fn add_from_fields(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
    ) -> ExpenseResult<ExpenseInput> {
        let input = ExpenseInput::from_fields(date, category, amount).map_err(|e| {
            tracing::warn!(error = %e, "expense rejected");
            e
        })?;
        self.add(input);
        Ok(input)
    }
}
