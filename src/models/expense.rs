//! Expense record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A single recorded expense
///
/// Records are immutable once created: fields are private and there are no
/// setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    date: NaiveDate,
    category: Category,
    amount: Money,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(date: NaiveDate, category: Category, amount: Money) -> Self {
        Self {
            date,
            category,
            amount,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)
    }
}
