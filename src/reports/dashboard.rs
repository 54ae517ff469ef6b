//! Everything one render needs, computed in one pass
//!
//! The dashboard is rebuilt from the session on every render; it holds no
//! state of its own.

use crate::models::ExpenseRecord;
use crate::session::Session;

use super::budget_comparison::{budget_comparison, BudgetComparisonRow};
use super::category::{category_distribution, category_totals, CategoryShare, CategoryTotal};
use super::daily::{daily_totals, DailyTotal};
use super::metrics::{global_metrics, GlobalMetrics};
use super::monthly::{monthly_by_category, MonthlyRow};

/// Message shown instead of tables, charts and metrics before the first expense
pub const EMPTY_LEDGER_MESSAGE: &str = "No expenses recorded yet. Start adding expenses above!";

/// All views derived from a non-empty ledger
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Expense history, newest first
    pub history: Vec<ExpenseRecord>,
    pub monthly: Vec<MonthlyRow>,
    pub daily: Vec<DailyTotal>,
    pub categories: Vec<CategoryTotal>,
    pub distribution: Vec<CategoryShare>,
    pub comparison: Vec<BudgetComparisonRow>,
    pub metrics: GlobalMetrics,
}

/// What the presentation layer should show
#[derive(Debug, Clone)]
pub enum Dashboard {
    /// Nothing recorded yet. Metrics are still computed (the budget total is
    /// known) but are not displayed.
    Empty { metrics: GlobalMetrics },
    /// At least one expense
    Populated(Box<DashboardData>),
}

impl Dashboard {
    /// Recompute every view from the session
    pub fn generate(session: &Session) -> Self {
        if session.ledger().is_empty() {
            tracing::debug!("dashboard: empty ledger");
            return Dashboard::Empty {
                metrics: global_metrics(session),
            };
        }

        let data = DashboardData {
            history: session.ledger().by_date_desc().into_iter().cloned().collect(),
            monthly: monthly_by_category(session),
            daily: daily_totals(session),
            categories: category_totals(session),
            distribution: category_distribution(session),
            comparison: budget_comparison(session),
            metrics: global_metrics(session),
        };
        tracing::debug!(records = data.history.len(), "dashboard recomputed");

        Dashboard::Populated(Box::new(data))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Dashboard::Empty { .. })
    }

    pub fn metrics(&self) -> GlobalMetrics {
        match self {
            Dashboard::Empty { metrics } => *metrics,
            Dashboard::Populated(data) => data.metrics,
        }
    }

    /// The populated views, if any
    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            Dashboard::Empty { .. } => None,
            Dashboard::Populated(data) => Some(data.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_dashboard() {
        let mut session = Session::new();
        session.set_limit(Category::Food, Money::from_dollars(500));

        let dashboard = Dashboard::generate(&session);
        assert!(dashboard.is_empty());
        assert!(dashboard.data().is_none());
        assert_eq!(dashboard.metrics().total_budget, Money::from_dollars(500));
        assert_eq!(dashboard.metrics().remaining, Money::from_dollars(500));
    }

    #[test]
    fn test_populated_dashboard() {
        let mut session = Session::new();
        session.add_expense(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Category::Food,
            Money::from_dollars(20),
        );
        session.add_expense(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            Category::Rent,
            Money::from_dollars(900),
        );

        let dashboard = Dashboard::generate(&session);
        let data = dashboard.data().unwrap();
        assert_eq!(data.history[0].category(), Category::Rent);
        assert_eq!(data.monthly.len(), 2);
        assert_eq!(data.daily.len(), 2);
        assert_eq!(data.categories.len(), 2);
        assert_eq!(data.comparison.len(), Category::COUNT);
        assert_eq!(data.metrics.total_spent, Money::from_dollars(920));
    }
}
