//! Expense history view
//!
//! Every recorded expense, newest date first

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::reports::DashboardData;
use crate::tui::app::App;

use super::{panel_border, view_title};

/// Render the history table
pub fn render(frame: &mut Frame, app: &App, data: &DashboardData, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(format!(
            "{}({} expenses) ",
            view_title(app.active_view),
            data.history.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(panel_border(app)));

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Category"),
        Cell::from("Amount"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = data
        .history
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.date().format(app.settings.display_date_format()).to_string()),
                Cell::from(record.category().name()),
                Cell::from(format!(
                    "{:>14}",
                    record.amount().format_grouped(symbol)
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(
        app.selected_history_index
            .min(data.history.len().saturating_sub(1)),
    ));

    frame.render_stateful_widget(table, area, &mut state);
}
