//! Charts view
//!
//! Spending over time, spending by category, budget against actual and the
//! share of each category. Chart series are built by plain functions so the
//! numbers can be checked without a terminal.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::display::report::{format_bar, format_percentage};
use crate::models::{Category, Money};
use crate::reports::{BudgetComparisonRow, CategoryShare, DailyTotal, DashboardData};
use crate::tui::layout::ChartsLayout;

/// Fixed color for each category, shared by every chart
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Food => Color::Green,
        Category::Transport => Color::Blue,
        Category::Entertainment => Color::Magenta,
        Category::Rent => Color::Yellow,
        Category::Utilities => Color::Cyan,
    }
}

/// Points for the spending-over-time line: x is the number of days since the
/// first expense date, y the total in currency units
pub fn daily_points(daily: &[DailyTotal]) -> Vec<(f64, f64)> {
    let Some(first) = daily.first() else {
        return Vec::new();
    };

    daily
        .iter()
        .map(|day| {
            let offset = (day.date - first.date).num_days();
            (offset as f64, day.total.as_f64())
        })
        .collect()
}

/// Bar height for an amount, in whole currency units
///
/// Capped so the bar chart's internal scaling stays within u64.
fn bar_value(amount: Money) -> u64 {
    amount.dollars().clamp(0, i64::from(u32::MAX)) as u64
}

/// Upper bound for a y axis, with some headroom
fn axis_max(max: f64) -> f64 {
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

/// Render all four charts
pub fn render(frame: &mut Frame, data: &DashboardData, symbol: &str, area: Rect) {
    let block = Block::default()
        .title(" Charts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = ChartsLayout::new(inner);

    render_over_time(frame, &data.daily, symbol, layout.over_time);
    render_by_category(frame, data, symbol, layout.by_category);
    render_budget_vs_actual(frame, &data.comparison, layout.budget_vs_actual);
    render_distribution(frame, &data.distribution, layout.distribution);
}

fn render_over_time(frame: &mut Frame, daily: &[DailyTotal], symbol: &str, area: Rect) {
    let points = daily_points(daily);
    let max_y = axis_max(points.iter().map(|(_, y)| *y).fold(0.0, f64::max));
    let max_x = points.last().map_or(0.0, |(x, _)| *x).max(1.0);

    let dataset = Dataset::default()
        .name("Daily total")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let x_labels: Vec<Span> = match (daily.first(), daily.last()) {
        (Some(first), Some(last)) if daily.len() > 1 => {
            vec![Span::raw(first.date.to_string()), Span::raw(last.date.to_string())]
        }
        (Some(only), _) => vec![Span::raw(only.date.to_string())],
        _ => Vec::new(),
    };

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(" Spending Over Time ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Amount")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_y])
                .labels(vec![
                    Span::raw(Money::zero().format_grouped(symbol)),
                    Span::raw(Money::from_cents((max_y * 100.0) as i64).format_grouped(symbol)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn render_by_category(frame: &mut Frame, data: &DashboardData, symbol: &str, area: Rect) {
    let bars: Vec<Bar> = data
        .categories
        .iter()
        .map(|total| {
            Bar::default()
                .value(bar_value(total.total))
                .label(Line::from(total.category.name()))
                .text_value(total.total.format_grouped(symbol))
                .style(Style::default().fg(category_color(total.category)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Spending by Category ")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2);

    frame.render_widget(chart, area);
}

fn render_budget_vs_actual(frame: &mut Frame, comparison: &[BudgetComparisonRow], area: Rect) {
    let groups: Vec<BarGroup> = comparison
        .iter()
        .map(|row| {
            let spent_style = if row.is_over_budget() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(category_color(row.category))
            };

            BarGroup::default()
                .label(Line::from(row.category.name()))
                .bars(&[
                    Bar::default()
                        .value(bar_value(row.spent))
                        .text_value(row.spent.dollars().to_string())
                        .style(spent_style),
                    Bar::default()
                        .value(bar_value(row.budget))
                        .text_value(row.budget.dollars().to_string())
                        .style(Style::default().fg(Color::DarkGray)),
                ])
        })
        .collect();

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title(Line::from(vec![
                    Span::raw(" Budget vs Actual ("),
                    Span::styled("spent", Style::default().fg(Color::Green)),
                    Span::raw(" / "),
                    Span::styled("budget", Style::default().fg(Color::DarkGray)),
                    Span::raw(") "),
                ]))
                .borders(Borders::ALL),
        )
        .bar_width(5)
        .bar_gap(1)
        .group_gap(3);

    for group in groups {
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

fn render_distribution(frame: &mut Frame, distribution: &[CategoryShare], area: Rect) {
    let bar_width = (area.width as usize).saturating_sub(30).clamp(5, 30);

    let lines: Vec<Line> = distribution
        .iter()
        .map(|share| {
            let color = category_color(share.category);
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", share.category.name()),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format_bar(share.percentage, 100.0, bar_width),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!(" {:>6}", format_percentage(share.percentage)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Expense Distribution ")
            .borders(Borders::ALL),
    );

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_daily_points() {
        let daily = vec![
            DailyTotal {
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                total: Money::from_dollars(30),
            },
            DailyTotal {
                date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                total: Money::from_cents(550),
            },
        ];

        assert_eq!(daily_points(&daily), vec![(0.0, 30.0), (27.0, 5.5)]);
        assert!(daily_points(&[]).is_empty());
    }

    #[test]
    fn test_bar_value() {
        assert_eq!(bar_value(Money::from_cents(1999)), 19);
        assert_eq!(bar_value(Money::from_cents(-500)), 0);
        assert_eq!(bar_value(Money::from_cents(i64::MAX)), u64::from(u32::MAX));
    }

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(0.0), 1.0);
        assert!(axis_max(100.0) > 100.0);
    }

    #[test]
    fn test_category_colors_are_distinct() {
        let colors: Vec<Color> = Category::ALL.iter().map(|&c| category_color(c)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
