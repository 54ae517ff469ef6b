//! Add expense dialog
//!
//! Modal form with a date, a category selector and an amount. The category
//! is picked from the fixed list with the arrow keys; its image reference
//! and caption are shown under the selector.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::ExpenseResult;
use crate::models::Category;
use crate::services::{today, ExpenseInput, ExpenseService, DATE_FORMAT};
use crate::session::Session;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Date,
    Category,
    Amount,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
        }
    }
}

/// State for the add expense dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,
    /// Date input, pre-filled with today
    pub date_input: TextInput,
    /// Selected category
    pub category: Category,
    /// Amount input
    pub amount_input: TextInput,
    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a new form with today's date and the default category
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD (blank for today)")
                .content(today().format(DATE_FORMAT).to_string()),
            category: Category::default(),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.date_input.focused = self.focused_field == ExpenseField::Date;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
    }

    /// The text input under focus, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Date => Some(&mut self.date_input),
            ExpenseField::Category => None,
            ExpenseField::Amount => Some(&mut self.amount_input),
        }
    }

    /// Validate the form and append the expense to the session
    pub fn submit(&self, session: &mut Session) -> ExpenseResult<ExpenseInput> {
        ExpenseService::new(session).add_from_fields(
            self.date_input.value(),
            self.category.name(),
            self.amount_input.value(),
        )
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(72, 15, frame.area());
    frame.render_widget(Clear, area);

    let form = &app.expense_form;

    let block = Block::default()
        .title(" Add Expense ")
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
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Caption
            Constraint::Length(1), // Image
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(form.date_input.to_line()), chunks[1]);
    frame.render_widget(Paragraph::new(category_line(form)), chunks[2]);

    let caption = Line::from(vec![
        Span::raw(format!("{:>12}", "")),
        Span::styled(
            form.category.image_caption(),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ]);
    frame.render_widget(Paragraph::new(caption), chunks[3]);

    let image = Line::from(vec![
        Span::raw(format!("{:>12}", "")),
        Span::styled(
            form.category.image_url(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        ),
    ]);
    frame.render_widget(Paragraph::new(image), chunks[4]);

    frame.render_widget(Paragraph::new(form.amount_input.to_line()), chunks[5]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[7]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

fn category_line(form: &ExpenseFormState) -> Line<'static> {
    let focused = form.focused_field == ExpenseField::Category;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>10}: ", "Category"), label_style)];
    for category in Category::ALL {
        let style = if category == form.category {
            if focused {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            }
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", category.name()), style));
    }

    Line::from(spans)
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),

        KeyCode::Enter => {
            let result = form.submit(&mut app.session);
            match result {
                Ok(input) => {
                    app.set_status(format!(
                        "Added {} expense of {} on {}",
                        input.category,
                        input.amount.format_grouped(&app.settings.currency_symbol),
                        input.date
                    ));
                    app.close_dialog();
                }
                Err(e) => app.expense_form.set_error(e.to_string()),
            }
        }

        KeyCode::Left if form.focused_field == ExpenseField::Category => {
            form.category = form.category.prev();
        }
        KeyCode::Right if form.focused_field == ExpenseField::Category => {
            form.category = form.category.next();
        }

        _ => {
            form.clear_error();
            let Some(input) = form.focused_input() else {
                return false;
            };
            match key.code {
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => return false,
            }
        }
    }

    true
}
