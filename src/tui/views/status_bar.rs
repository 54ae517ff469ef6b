//! Status bar view
//!
//! Shows the expense count, the latest status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.session.ledger().len();

    let mut spans = vec![Span::styled(
        format!(" {} expense(s) ", count),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " a:Add  x:Export  ?:Help  q:Quit ";

    // Right-align the hints when there is room
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
