//! Per-category monthly budget limits

use crate::models::{Category, CategoryMap, Money};

/// Monthly limit for every category
///
/// Every category always has an entry; limits start at zero and are only
/// ever overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetStore {
    limits: CategoryMap<Money>,
}

impl BudgetStore {
    /// All limits set to zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the limit for a category, returning the previous one
    pub fn set_limit(&mut self, category: Category, limit: Money) -> Money {
        self.limits.set(category, limit)
    }

    /// Current limit for a category
    pub fn limit(&self, category: Category) -> Money {
        *self.limits.get(category)
    }

    /// Sum of all limits
    pub fn total(&self) -> Money {
        self.limits.iter().map(|(_, limit)| *limit).sum()
    }

    /// Limits in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.limits.iter().map(|(c, limit)| (c, *limit))
    }

    /// The underlying total mapping
    pub fn limits(&self) -> &CategoryMap<Money> {
        &self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_zero() {
        let budgets = BudgetStore::new();
        for category in Category::ALL {
            assert_eq!(budgets.limit(category), Money::zero());
        }
        assert_eq!(budgets.iter().count(), Category::COUNT);
        assert_eq!(budgets.total(), Money::zero());
    }

    #[test]
    fn test_set_limit_overwrites() {
        let mut budgets = BudgetStore::new();
        budgets.set_limit(Category::Food, Money::from_dollars(500));
        let previous = budgets.set_limit(Category::Food, Money::from_dollars(300));

        assert_eq!(previous, Money::from_dollars(500));
        assert_eq!(budgets.limit(Category::Food), Money::from_dollars(300));
        assert_eq!(budgets.limit(Category::Rent), Money::zero());
    }

    #[test]
    fn test_total() {
        let mut budgets = BudgetStore::new();
        budgets.set_limit(Category::Food, Money::from_dollars(500));
        budgets.set_limit(Category::Rent, Money::from_cents(120050));
        assert_eq!(budgets.total(), Money::from_cents(170050));
    }
}
