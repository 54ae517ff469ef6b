//! Session state
//!
//! A [`Session`] owns one expense ledger and one set of budget limits for
//! the lifetime of a single run. The caller creates it, passes it to the
//! services and reports, and drops it when the run ends. Nothing is saved.

pub mod budget;
pub mod ledger;

pub use budget::BudgetStore;
pub use ledger::Ledger;

use chrono::NaiveDate;

use crate::models::{Category, Money};

/// Session-scoped ledger and budget store
#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: Ledger,
    budgets: BudgetStore,
}

impl Session {
    /// Create a fresh session: empty ledger, every budget at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budgets(&self) -> &BudgetStore {
        &self.budgets
    }

    /// Append an expense to the ledger
    pub fn add_expense(&mut self, date: NaiveDate, category: Category, amount: Money) {
        self.ledger.add_expense(date, category, amount);
    }

    /// Overwrite a category's monthly limit, returning the previous one
    pub fn set_limit(&mut self, category: Category, limit: Money) -> Money {
        self.budgets.set_limit(category, limit)
    }

    /// Whether any expense has been recorded yet
    pub fn has_expenses(&self) -> bool {
        !self.ledger.is_empty()
    }
}
