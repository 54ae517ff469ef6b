//! Edit budget dialog
//!
//! Sets the monthly limit for one category

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::ExpenseResult;
use crate::models::{Category, Money};
use crate::services::BudgetService;
use crate::session::Session;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the edit budget dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetFormState {
    /// The category being edited
    pub category: Category,
    /// Current limit
    pub current_limit: Money,
    /// New limit input
    pub limit_input: TextInput,
    /// Error message
    pub error_message: Option<String>,
}

impl BudgetFormState {
    /// Initialize the dialog for a category
    pub fn init(category: Category, current_limit: Money) -> Self {
        // Pre-fill with the current limit, blank when unset
        let content = if current_limit.is_zero() {
            String::new()
        } else {
            current_limit.to_decimal_string()
        };

        let mut limit_input = TextInput::new()
            .label("New limit")
            .placeholder("0.00")
            .content(content);
        limit_input.focused = true;

        Self {
            category,
            current_limit,
            limit_input,
            error_message: None,
        }
    }

    /// Validate the input and apply it to the session
    pub fn submit(&self, session: &mut Session) -> ExpenseResult<Money> {
        BudgetService::new(session).set_limit_from_input(self.category, self.limit_input.value())
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the edit budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(50, 11, frame.area());
    frame.render_widget(Clear, area);

    let state = &app.budget_form;
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(" Budget Settings ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category name
            Constraint::Length(1), // Current limit
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let category_line = Line::from(vec![
        Span::styled("  Category: ", Style::default().fg(Color::Yellow)),
        Span::styled(state.category.name(), Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(category_line), chunks[1]);

    let current_line = Line::from(vec![
        Span::styled("   Current: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            state.current_limit.format_grouped(symbol),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[2]);

    frame.render_widget(Paragraph::new(state.limit_input.to_line()), chunks[4]);

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Cyan)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[6]);
}

/// Handle key events for the edit budget dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Enter => match app.budget_form.submit(&mut app.session) {
            Ok(limit) => {
                let category = app.budget_form.category;
                app.set_status(format!(
                    "Budget for {} set to {}",
                    category,
                    limit.format_grouped(&app.settings.currency_symbol)
                ));
                app.close_dialog();
            }
            Err(e) => app.budget_form.set_error(e.to_string()),
        },

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.budget_form.limit_input.clear();
        }

        KeyCode::Char(c) => {
            app.budget_form.error_message = None;
            app.budget_form.limit_input.insert(c);
        }
        KeyCode::Backspace => {
            app.budget_form.error_message = None;
            app.budget_form.limit_input.backspace();
        }
        KeyCode::Delete => app.budget_form.limit_input.delete(),
        KeyCode::Left => app.budget_form.limit_input.move_left(),
        KeyCode::Right => app.budget_form.limit_input.move_right(),
        KeyCode::Home => app.budget_form.limit_input.move_start(),
        KeyCode::End => app.budget_form.limit_input.move_end(),

        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_prefills_current_limit() {
        let state = BudgetFormState::init(Category::Rent, Money::from_cents(120_050));
        assert_eq!(state.limit_input.value(), "1200.50");

        let state = BudgetFormState::init(Category::Rent, Money::zero());
        assert_eq!(state.limit_input.value(), "");
    }

    #[test]
    fn test_submit_sets_limit() {
        let mut session = Session::new();
        let mut state = BudgetFormState::init(Category::Food, Money::zero());
        state.limit_input = state.limit_input.content("500");

        assert_eq!(state.submit(&mut session).unwrap(), Money::from_dollars(500));
        assert_eq!(session.budgets().limit(Category::Food), Money::from_dollars(500));
    }

    #[test]
    fn test_negative_limit_rejected() {
        let mut session = Session::new();
        let mut state = BudgetFormState::init(Category::Food, Money::zero());
        state.limit_input = state.limit_input.content("-10");

        assert!(state.submit(&mut session).is_err());
        assert_eq!(session.budgets().limit(Category::Food), Money::zero());
    }
}
