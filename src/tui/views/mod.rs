//! TUI Views module
//!
//! The main panel shows key metrics above the active view (history, monthly
//! summary or charts). Every render recomputes the dashboard from the
//! session; while the ledger is empty only the empty-state message is drawn.

pub mod charts;
pub mod history;
pub mod metrics;
pub mod monthly;
pub mod sidebar;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::reports::{Dashboard, DashboardData, EMPTY_LEDGER_MESSAGE};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel};
use super::dialogs;
use super::layout::{AppLayout, MainPanelLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let dashboard = app.dashboard();

    sidebar::render(frame, app, layout.sidebar);

    match &dashboard {
        Dashboard::Empty { .. } => render_empty(frame, app, layout.main),
        Dashboard::Populated(data) => render_main(frame, app, data, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the metrics row and the active view
fn render_main(frame: &mut Frame, app: &App, data: &DashboardData, area: Rect) {
    let layout = MainPanelLayout::new(area);
    let symbol = app.settings.currency_symbol.as_str();

    metrics::render(frame, &data.metrics, symbol, layout.metrics);

    match app.active_view {
        ActiveView::History => history::render(frame, app, data, layout.content),
        ActiveView::Monthly => monthly::render(frame, app, data, layout.content),
        ActiveView::Charts => charts::render(frame, data, symbol, layout.content),
    }
}

/// Render the empty-state message in place of every table, chart and metric
fn render_empty(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(view_title(app.active_view))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(panel_border(app)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically centre the message
    let message_area = Rect {
        y: inner.y + inner.height / 2,
        height: inner.height.min(2),
        ..inner
    };

    let text = Paragraph::new(EMPTY_LEDGER_MESSAGE)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );

    frame.render_widget(text, message_area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::EditBudget(_) => dialogs::budget::render(frame, app),
        ActiveDialog::Export => dialogs::export::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Title of the main panel for a view
pub fn view_title(view: ActiveView) -> &'static str {
    match view {
        ActiveView::History => " Expense History ",
        ActiveView::Monthly => " Monthly Summary ",
        ActiveView::Charts => " Charts ",
    }
}

/// Border color of the main panel
pub fn panel_border(app: &App) -> Color {
    if app.focused_panel == FocusedPanel::Main {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(140, 45);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for row in buffer.content.chunks(width) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    fn populated_app() -> App {
        let mut app = App::new(Settings::default());
        app.session.set_limit(Category::Food, Money::from_dollars(500));
        app.session.add_expense(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Category::Food,
            Money::from_dollars(20),
        );
        app.session.add_expense(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            Category::Transport,
            Money::from_dollars(5),
        );
        app
    }

    #[test]
    fn test_empty_state_hides_metrics() {
        let mut app = App::new(Settings::default());
        app.session.set_limit(Category::Food, Money::from_dollars(500));

        let text = screen_text(&app);
        assert!(text.contains("No expenses recorded yet."));
        assert!(!text.contains("Total Spent"));
        // Budget settings are still listed
        assert!(text.contains("Budget Settings"));
    }

    #[test]
    fn test_history_view_renders_records() {
        let app = populated_app();
        let text = screen_text(&app);

        assert!(text.contains("Total Spent"));
        assert!(text.contains("$25.00"));
        assert!(text.contains("2024-02-01"));
        assert!(!text.contains("No expenses recorded yet."));
    }

    #[test]
    fn test_every_view_renders() {
        let mut app = populated_app();
        for view in [ActiveView::History, ActiveView::Monthly, ActiveView::Charts] {
            app.switch_view(view);
            let text = screen_text(&app);
            assert!(text.contains(view_title(view).trim()));
        }
    }

    #[test]
    fn test_dialogs_render() {
        let mut app = populated_app();
        app.open_dialog(ActiveDialog::AddExpense);
        let text = screen_text(&app);
        assert!(text.contains("Add Expense"));
        assert!(text.contains("Food Expenses"));

        app.open_dialog(ActiveDialog::Export);
        assert!(screen_text(&app).contains("expenses.csv"));
    }
}
