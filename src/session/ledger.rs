//! Append-only expense ledger

use chrono::NaiveDate;

use crate::models::{Category, ExpenseRecord, Money};

/// Ordered, append-only sequence of expense records
///
/// Insertion order is the canonical order. There is no way to edit or
/// remove a record.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new expense
    ///
    /// The amount is not re-validated here; the input boundary guarantees
    /// it is non-negative.
    pub fn add_expense(&mut self, date: NaiveDate, category: Category, amount: Money) {
        self.records.push(ExpenseRecord::new(date, category, amount));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Records newest first, for display
    ///
    /// The sort is stable, so expenses on the same date keep insertion order.
    pub fn by_date_desc(&self) -> Vec<&ExpenseRecord> {
        let mut sorted: Vec<&ExpenseRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.date().cmp(&a.date()));
        sorted
    }

    /// Sum of every amount in the ledger
    pub fn total(&self) -> Money {
        self.records.iter().map(|r| r.amount()).sum()
    }
}
