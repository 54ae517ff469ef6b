//! Budget vs actual per category

use crate::models::{Category, Money};
use crate::session::Session;

use super::category::category_totals_filled;

/// Budget against spending for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetComparisonRow {
    pub category: Category,
    pub spent: Money,
    pub budget: Money,
    /// `budget - spent`; negative when over budget
    pub remaining: Money,
}

impl BudgetComparisonRow {
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Spent as a percentage of budget, `None` when the budget is zero
    pub fn percent_used(&self) -> Option<f64> {
        if self.budget.is_zero() {
            None
        } else {
            Some(self.spent.cents() as f64 / self.budget.cents() as f64 * 100.0)
        }
    }
}

/// One row per category, in category order, whether or not anything was spent
pub fn budget_comparison(session: &Session) -> Vec<BudgetComparisonRow> {
    let spent = if session.ledger().is_empty() {
        Default::default()
    } else {
        category_totals_filled(session)
    };

    session
        .budgets()
        .iter()
        .map(|(category, budget)| BudgetComparisonRow {
            category,
            spent: spent[category],
            budget,
            remaining: budget - spent[category],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_one_row_per_category_when_empty() {
        let rows = budget_comparison(&Session::new());
        assert_eq!(rows.len(), Category::COUNT);
        for (row, category) in rows.iter().zip(Category::ALL) {
            assert_eq!(row.category, category);
            assert_eq!(row.spent, Money::zero());
            assert_eq!(row.remaining, Money::zero());
            assert_eq!(row.percent_used(), None);
        }
    }

    #[test]
    fn test_overspent_is_negative_remaining() {
        let mut session = Session::new();
        session.set_limit(Category::Food, Money::from_dollars(10));
        session.add_expense(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Category::Food,
            Money::from_dollars(15),
        );

        let rows = budget_comparison(&session);
        assert_eq!(rows.len(), Category::COUNT);

        let food = rows[0];
        assert_eq!(
            food,
            BudgetComparisonRow {
                category: Category::Food,
                spent: Money::from_dollars(15),
                budget: Money::from_dollars(10),
                remaining: Money::from_dollars(-5),
            }
        );
        assert!(food.is_over_budget());
        assert_eq!(food.percent_used(), Some(150.0));

        let rent = rows[3];
        assert_eq!(rent.category, Category::Rent);
        assert_eq!(rent.spent, Money::zero());
        assert!(!rent.is_over_budget());
    }
}
