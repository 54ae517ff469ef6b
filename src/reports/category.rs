//! Spending by category

use crate::models::{Category, CategoryMap, Money};
use crate::session::Session;

/// Total spending for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of expenses recorded in this category
    pub count: usize,
}

/// A category's share of total spending
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Percentage of total spending (0-100)
    pub percentage: f64,
}

/// Spending per category over the whole ledger
///
/// Only categories with at least one expense are listed, in category order.
pub fn category_totals(session: &Session) -> Vec<CategoryTotal> {
    let ledger = session.ledger();
    if ledger.is_empty() {
        return Vec::new();
    }

    let mut totals: CategoryMap<(Money, usize)> = CategoryMap::default();
    for record in ledger.records() {
        let entry = &mut totals[record.category()];
        entry.0 += record.amount();
        entry.1 += 1;
    }

    totals
        .iter()
        .filter(|(_, (_, count))| *count > 0)
        .map(|(category, (total, count))| CategoryTotal {
            category,
            total: *total,
            count: *count,
        })
        .collect()
}

/// Spending per category for every category, zero when nothing was spent
pub fn category_totals_filled(session: &Session) -> CategoryMap<Money> {
    let mut filled: CategoryMap<Money> = CategoryMap::default();
    for row in category_totals(session) {
        filled[row.category] = row.total;
    }
    filled
}

/// Percentage of total spending per category (the distribution chart)
pub fn category_distribution(session: &Session) -> Vec<CategoryShare> {
    let totals = category_totals(session);
    if totals.is_empty() {
        return Vec::new();
    }

    let grand_total: Money = totals.iter().map(|t| t.total).sum();
    totals
        .into_iter()
        .map(|t| {
            let percentage = if grand_total.is_zero() {
                0.0
            } else {
                (t.total.cents() as f64 / grand_total.cents() as f64) * 100.0
            };
            CategoryShare {
                category: t.category,
                total: t.total,
                percentage,
            }
        })
        .collect()
}
