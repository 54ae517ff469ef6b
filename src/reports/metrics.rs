//! Headline totals

use crate::models::Money;
use crate::session::Session;

/// Total spent, total budget and what remains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalMetrics {
    pub total_spent: Money,
    pub total_budget: Money,
    pub remaining: Money,
}

/// Compute the headline totals
///
/// The budget total does not depend on the ledger, so it is meaningful even
/// before the first expense.
pub fn global_metrics(session: &Session) -> GlobalMetrics {
    let total_spent = if session.ledger().is_empty() {
        Money::zero()
    } else {
        session.ledger().total()
    };
    let total_budget = session.budgets().total();

    GlobalMetrics {
        total_spent,
        total_budget,
        remaining: total_budget - total_spent,
    }
}
