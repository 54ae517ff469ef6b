//! Budget service
//!
//! Validates budget limit input and writes it to the session budget store.

use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money};
use crate::session::Session;

use super::input::{parse_amount, parse_category};

/// A validated budget limit for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetInput {
    pub category: Category,
    pub limit: Money,
}

/// Parses `CATEGORY=LIMIT` (the command-line form)
impl FromStr for BudgetInput {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, limit) = s.split_once('=').ok_or_else(|| {
            ExpenseError::Validation(format!("Expected CATEGORY=LIMIT but got '{}'", s))
        })?;

        Ok(Self {
            category: parse_category(category)?,
            limit: parse_amount(limit, "Budget")?,
        })
    }
}

/// Service for budget management
pub struct BudgetService<'a> {
    session: &'a mut Session,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Set a category's monthly limit
    pub fn set_limit(&mut self, input: BudgetInput) {
        let before = self.session.set_limit(input.category, input.limit);
        tracing::info!(
            category = %input.category,
            before = %before,
            after = %input.limit,
            "budget limit updated"
        );
    }

    /// Validate a raw limit for a category and apply it
    ///
    /// On error the budget store is left unchanged.
    pub fn set_limit_from_input(&mut self, category: Category, limit: &str) -> ExpenseResult<Money> {
        let limit = parse_amount(limit, "Budget").map_err(|e| {
            tracing::warn!(category = %category, error = %e, "budget limit rejected");
            e
        })?;
        self.set_limit(BudgetInput { category, limit });
        Ok(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_form() {
        let input: BudgetInput = "Food=500".parse().unwrap();
        assert_eq!(input.category, Category::Food);
        assert_eq!(input.limit, Money::from_dollars(500));

        assert!("Food:500".parse::<BudgetInput>().is_err());
        assert!("Food=-5".parse::<BudgetInput>().is_err());
        assert!("Pets=5".parse::<BudgetInput>().is_err());
    }

    #[test]
    fn test_set_limit_from_input() {
        let mut session = Session::new();
        let mut service = BudgetService::new(&mut session);

        service.set_limit_from_input(Category::Rent, "1200").unwrap();
        assert!(service.set_limit_from_input(Category::Rent, "-1").is_err());

        assert_eq!(session.budgets().limit(Category::Rent), Money::from_dollars(1200));
    }
}
