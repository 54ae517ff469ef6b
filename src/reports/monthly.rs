//! Monthly summary: spending per month and category

use std::collections::BTreeMap;

use crate::models::{Category, CategoryMap, Money, Month};
use crate::session::Session;

/// One month's spending, with a value for every category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRow {
    pub month: Month,
    pub totals: CategoryMap<Money>,
}

impl MonthlyRow {
    /// Spending for one category in this month (zero if none)
    pub fn get(&self, category: Category) -> Money {
        self.totals[category]
    }

    /// Spending across all categories in this month
    pub fn total(&self) -> Money {
        self.totals.iter().map(|(_, amount)| *amount).sum()
    }
}

/// Month x category grid, months ascending
///
/// Only months with at least one expense appear, and each of those months
/// has a cell for every category, zero when nothing was spent.
pub fn monthly_by_category(session: &Session) -> Vec<MonthlyRow> {
    let ledger = session.ledger();
    if ledger.is_empty() {
        return Vec::new();
    }

    let mut grid: BTreeMap<Month, CategoryMap<Money>> = BTreeMap::new();
    for record in ledger.records() {
        let row = grid.entry(Month::of(record.date())).or_default();
        row[record.category()] += record.amount();
    }

    grid.into_iter()
        .map(|(month, totals)| MonthlyRow { month, totals })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_ledger() {
        assert!(monthly_by_category(&Session::new()).is_empty());
    }

    #[test]
    fn test_zero_filled_grid() {
        let mut session = Session::new();
        session.add_expense(date(2024, 1, 5), Category::Food, Money::from_dollars(20));
        session.add_expense(date(2024, 1, 5), Category::Transport, Money::from_dollars(10));
        session.add_expense(date(2024, 2, 1), Category::Food, Money::from_dollars(5));

        let rows = monthly_by_category(&session);
        assert_eq!(rows.len(), 2);

        let january = &rows[0];
        assert_eq!(january.month.to_string(), "2024-01");
        assert_eq!(january.get(Category::Food), Money::from_dollars(20));
        assert_eq!(january.get(Category::Transport), Money::from_dollars(10));
        assert_eq!(january.get(Category::Entertainment), Money::zero());
        assert_eq!(january.get(Category::Rent), Money::zero());
        assert_eq!(january.get(Category::Utilities), Money::zero());
        assert_eq!(january.total(), Money::from_dollars(30));

        let february = &rows[1];
        assert_eq!(february.month.to_string(), "2024-02");
        assert_eq!(february.get(Category::Food), Money::from_dollars(5));
        assert_eq!(february.get(Category::Transport), Money::zero());
    }

    #[test]
    fn test_every_month_has_every_category() {
        let mut session = Session::new();
        for (i, category) in Category::ALL.iter().enumerate() {
            session.add_expense(date(2023, 1 + i as u32, 1), *category, Money::from_dollars(1));
        }

        let rows = monthly_by_category(&session);
        assert_eq!(rows.len(), Category::COUNT);
        for row in &rows {
            assert_eq!(row.totals.iter().count(), Category::COUNT);
            assert_eq!(row.total(), Money::from_dollars(1));
        }
    }
}
