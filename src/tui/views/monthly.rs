//! Monthly summary view
//!
//! One row per month with a column for every category, zeros included

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::models::Category;
use crate::reports::DashboardData;
use crate::tui::app::App;

use super::{panel_border, view_title};

/// Render the month × category grid
pub fn render(frame: &mut Frame, app: &App, data: &DashboardData, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(view_title(app.active_view))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(panel_border(app)));

    let mut header_cells = vec![Cell::from("Month")];
    header_cells.extend(Category::ALL.iter().map(|c| Cell::from(c.name())));
    header_cells.push(Cell::from("Total"));

    let header = Row::new(header_cells).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = data
        .monthly
        .iter()
        .map(|row| {
            let mut cells = vec![Cell::from(row.month.to_string())];
            cells.extend(Category::ALL.iter().map(|&category| {
                let amount = row.get(category);
                let style = if amount.is_zero() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                Cell::from(amount.format_grouped(symbol)).style(style)
            }));
            cells.push(
                Cell::from(row.total().format_grouped(symbol))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            );
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(9)];
    widths.extend(std::iter::repeat(Constraint::Length(14)).take(Category::COUNT + 1));

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}
