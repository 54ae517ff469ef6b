//! Export dialog
//!
//! Lets the user confirm or rename the CSV file before it is written

use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::ExportArtifact;
use crate::session::Session;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the export dialog
#[derive(Debug, Clone, Default)]
pub struct ExportFormState {
    /// File name input
    pub file_input: TextInput,
    /// Error message
    pub error_message: Option<String>,
}

impl ExportFormState {
    /// Initialize the dialog with a default file name
    pub fn init(default_file_name: &str) -> Self {
        let mut file_input = TextInput::new()
            .label("File")
            .placeholder("expenses.csv")
            .content(default_file_name);
        file_input.focused = true;

        Self {
            file_input,
            error_message: None,
        }
    }

    /// Build the artifact and write it to the chosen path
    pub fn submit(&self, session: &Session) -> ExpenseResult<ExportArtifact> {
        let file_name = self.file_input.value().trim();
        if file_name.is_empty() {
            return Err(ExpenseError::Validation(
                "File name cannot be empty".to_string(),
            ));
        }

        let artifact = ExportArtifact::expenses_csv(session, file_name)?;
        artifact.write_to(Path::new(file_name))?;
        Ok(artifact)
    }
}

/// Render the export dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let state = &app.export_form;

    let block = Block::default()
        .title(" Export CSV ")
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
            Constraint::Length(1), // Summary
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // File name
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let summary = Line::from(Span::styled(
        format!("{} expense(s) will be written", app.session.ledger().len()),
        Style::default().fg(Color::White),
    ));
    frame.render_widget(Paragraph::new(summary), chunks[0]);

    frame.render_widget(Paragraph::new(state.file_input.to_line()), chunks[2]);

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[3]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Export  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[4]);
}

/// Handle key events for the export dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let input = &mut app.export_form.file_input;

    match key.code {
        KeyCode::Esc => app.close_dialog(),

        KeyCode::Enter => match app.export_form.submit(&app.session) {
            Ok(artifact) => {
                app.set_status(format!(
                    "Exported {} expense(s) to {}",
                    artifact.row_count(),
                    artifact.file_name
                ));
                app.close_dialog();
            }
            Err(e) => app.export_form.error_message = Some(e.to_string()),
        },

        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),

        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_submit_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("january.csv");

        let mut session = Session::new();
        session.add_expense(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Category::Food,
            Money::from_dollars(20),
        );

        let state = ExportFormState::init(&path.to_string_lossy());
        let artifact = state.submit(&session).unwrap();

        assert_eq!(artifact.row_count(), 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Date,Category,Amount\n"));
    }

    #[test]
    fn test_empty_file_name_rejected() {
        let state = ExportFormState::init("  ");
        assert!(state.submit(&Session::new()).unwrap_err().is_validation());
    }
}
