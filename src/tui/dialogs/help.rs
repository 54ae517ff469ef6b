//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit (the session is discarded)"),
        key_line("?", "Show/hide help"),
        key_line("a", "Add expense"),
        key_line("x", "Export expenses as CSV"),
        key_line("Tab", "Switch panel focus"),
        key_line("1/2/3", "History / Monthly / Charts"),
        Line::from(""),
    ];

    if app.focused_panel == FocusedPanel::Sidebar {
        lines.push(heading("Budget Settings"));
        lines.push(Line::from(""));
        lines.push(key_line("j/k", "Select category"));
        lines.push(key_line("Enter", "Edit monthly limit"));
    } else {
        match app.active_view {
            ActiveView::History => {
                lines.push(heading("Expense History"));
                lines.push(Line::from(""));
                lines.push(key_line("j/k", "Scroll expenses"));
                lines.push(key_line("g/G", "Go to newest/oldest"));
            }
            ActiveView::Monthly => {
                lines.push(heading("Monthly Summary"));
                lines.push(Line::from(""));
                lines.push(Line::from("Spending per month and category."));
            }
            ActiveView::Charts => {
                lines.push(heading("Charts"));
                lines.push(Line::from(""));
                lines.push(Line::from(
                    "Spending over time, by category, against budget and by share.",
                ));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
