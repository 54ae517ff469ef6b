//! Sidebar view
//!
//! Shows the Budget Settings list and the view switcher

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_budgets(frame, app, layout.budgets);
    render_view_switcher(frame, app, layout.view_switcher);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Expense Tracker ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the monthly limit of every category
fn render_budgets(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let symbol = app.settings.currency_symbol.as_str();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Budget Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let budgets = app.session.budgets();

    let mut items: Vec<ListItem> = budgets
        .iter()
        .map(|(category, limit)| {
            let limit_color = if limit.is_zero() {
                Color::DarkGray
            } else {
                Color::Green
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<14}", category.name()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>12}", limit.format_grouped(symbol)),
                    Style::default().fg(limit_color),
                ),
            ]))
        })
        .collect();

    items.push(ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<14}", "Total"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>12}", budgets.total().format_grouped(symbol)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.selected_budget_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render view switcher
fn render_view_switcher(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Views ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let views = [
        ("1", "Expense History", ActiveView::History),
        ("2", "Monthly Summary", ActiveView::Monthly),
        ("3", "Charts", ActiveView::Charts),
    ];

    let items: Vec<ListItem> = views
        .iter()
        .map(|(key, name, view)| {
            let style = if app.active_view == *view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if app.active_view == *view { "▶" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
                Span::styled(*name, style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
