//! Reports module
//!
//! Pure aggregations over a session: spending over time, the monthly
//! summary grid, spending by category, budget vs actual and the headline
//! metrics. Every function recomputes from the full ledger and returns an
//! empty result for an empty ledger.

pub mod budget_comparison;
pub mod category;
pub mod daily;
pub mod dashboard;
pub mod metrics;
pub mod monthly;

pub use budget_comparison::{budget_comparison, BudgetComparisonRow};
pub use category::{
    category_distribution, category_totals, category_totals_filled, CategoryShare, CategoryTotal,
};
pub use daily::{daily_totals, DailyTotal};
pub use dashboard::{Dashboard, DashboardData, EMPTY_LEDGER_MESSAGE};
pub use metrics::{global_metrics, GlobalMetrics};
pub use monthly::{monthly_by_category, MonthlyRow};
