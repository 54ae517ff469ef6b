//! Plain-text rendering of the dashboard
//!
//! Produces the same sections as the TUI, as tables, for the one-shot
//! `report` command.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::{Category, Money};
use crate::reports::{Dashboard, DashboardData, GlobalMetrics, EMPTY_LEDGER_MESSAGE};

use super::report::{format_bar, format_percentage, section_header};

const BAR_WIDTH: usize = 30;

/// Render a dashboard as plain text
pub fn format_dashboard(dashboard: &Dashboard, symbol: &str) -> String {
    match dashboard {
        Dashboard::Empty { .. } => format!("{}\n", EMPTY_LEDGER_MESSAGE),
        Dashboard::Populated(data) => format_populated(data, symbol),
    }
}

fn format_populated(data: &DashboardData, symbol: &str) -> String {
    let sections = [
        ("Expense History", format_history(data, symbol)),
        ("Monthly Summary", format_monthly(data, symbol)),
        ("Spending Over Time", format_daily(data, symbol)),
        ("Budget vs Actual", format_comparison(data, symbol)),
        ("Spending by Category", format_categories(data, symbol)),
        ("Expense Distribution", format_distribution(data)),
        ("Key Metrics", format_metrics(&data.metrics, symbol)),
    ];

    let mut output = String::new();
    for (title, body) in sections {
        output.push_str(&section_header(title));
        output.push_str(&body);
        output.push_str("\n\n");
    }
    output
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Expense history, newest first
pub fn format_history(data: &DashboardData, symbol: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Date", "Category", "Amount"]);
    for record in &data.history {
        builder.push_record([
            record.date().format("%Y-%m-%d").to_string(),
            record.category().to_string(),
            record.amount().format_grouped(symbol),
        ]);
    }
    render(builder)
}

/// Month x category grid
pub fn format_monthly(data: &DashboardData, symbol: &str) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Month".to_string()];
    header.extend(Category::ALL.iter().map(|c| c.to_string()));
    builder.push_record(header);

    for row in &data.monthly {
        let mut record = vec![row.month.to_string()];
        record.extend(Category::ALL.iter().map(|c| row.get(*c).format_grouped(symbol)));
        builder.push_record(record);
    }
    render(builder)
}

/// Daily totals with a proportional bar
pub fn format_daily(data: &DashboardData, symbol: &str) -> String {
    let max = max_of(data.daily.iter().map(|d| d.total));

    let mut builder = Builder::default();
    builder.push_record(["Date", "Amount", ""]);
    for point in &data.daily {
        builder.push_record([
            point.date.format("%Y-%m-%d").to_string(),
            point.total.format_grouped(symbol),
            format_bar(point.total.as_f64(), max, BAR_WIDTH),
        ]);
    }
    render(builder)
}

/// Spent, budget and remaining for every category
pub fn format_comparison(data: &DashboardData, symbol: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Category", "Spent", "Budget", "Remaining", "Used"]);
    for row in &data.comparison {
        let remaining = if row.is_over_budget() {
            format!("{} (over)", row.remaining.format_grouped(symbol))
        } else {
            row.remaining.format_grouped(symbol)
        };
        builder.push_record([
            row.category.to_string(),
            row.spent.format_grouped(symbol),
            row.budget.format_grouped(symbol),
            remaining,
            row.percent_used()
                .map(format_percentage)
                .unwrap_or_else(|| "—".to_string()),
        ]);
    }
    render(builder)
}

/// Total per category with a proportional bar
pub fn format_categories(data: &DashboardData, symbol: &str) -> String {
    let max = max_of(data.categories.iter().map(|c| c.total));

    let mut builder = Builder::default();
    builder.push_record(["Category", "Amount", "Count", ""]);
    for row in &data.categories {
        builder.push_record([
            row.category.to_string(),
            row.total.format_grouped(symbol),
            row.count.to_string(),
            format_bar(row.total.as_f64(), max, BAR_WIDTH),
        ]);
    }
    render(builder)
}

/// Share of total spending per category
pub fn format_distribution(data: &DashboardData) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Category", "Share", ""]);
    for share in &data.distribution {
        builder.push_record([
            share.category.to_string(),
            format_percentage(share.percentage),
            format_bar(share.percentage, 100.0, BAR_WIDTH),
        ]);
    }
    render(builder)
}

/// The three headline numbers
pub fn format_metrics(metrics: &GlobalMetrics, symbol: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Total Spent", "Total Budget", "Budget Remaining"]);
    builder.push_record([
        metrics.total_spent.format_grouped(symbol),
        metrics.total_budget.format_grouped(symbol),
        metrics.remaining.format_grouped(symbol),
    ]);
    render(builder)
}

fn max_of(amounts: impl Iterator<Item = Money>) -> f64 {
    amounts.max().unwrap_or_default().as_f64()
}
