//! Key metrics row
//!
//! Total Spent, Total Budget and Budget Remaining side by side

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::reports::GlobalMetrics;

/// Render the three metric tiles
pub fn render(frame: &mut Frame, metrics: &GlobalMetrics, symbol: &str, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_tile(frame, "Total Spent", metrics.total_spent, symbol, Color::White, tiles[0]);
    render_tile(frame, "Total Budget", metrics.total_budget, symbol, Color::White, tiles[1]);
    render_tile(
        frame,
        "Budget Remaining",
        metrics.remaining,
        symbol,
        remaining_color(metrics.remaining),
        tiles[2],
    );
}

/// Red once spending exceeds the budget
pub fn remaining_color(remaining: Money) -> Color {
    if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    }
}

fn render_tile(
    frame: &mut Frame,
    title: &str,
    value: Money,
    symbol: &str,
    color: Color,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(value.format_grouped(symbol))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);

    frame.render_widget(paragraph, area);
}
