//! Application state for the TUI
//!
//! The App owns the session for as long as the dashboard runs. Quitting
//! drops it, and with it every recorded expense and budget limit.

use crate::config::Settings;
use crate::models::Category;
use crate::reports::Dashboard;
use crate::session::Session;

use super::dialogs::budget::BudgetFormState;
use super::dialogs::expense::ExpenseFormState;
use super::dialogs::export::ExportFormState;

/// Which view is shown in the main panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    History,
    Monthly,
    Charts,
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    EditBudget(Category),
    Export,
    Help,
}

/// Main application state
pub struct App {
    /// The live session
    pub session: Session,

    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the Budget Settings list
    pub selected_budget_index: usize,

    /// Selected row in the expense history
    pub selected_history_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add expense dialog state
    pub expense_form: ExpenseFormState,

    /// Edit budget dialog state
    pub budget_form: BudgetFormState,

    /// Export dialog state
    pub export_form: ExportFormState,
}

impl App {
    /// Create a new App with a fresh session
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(),
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            selected_budget_index: 0,
            selected_history_index: 0,
            status_message: None,
            expense_form: ExpenseFormState::new(),
            budget_form: BudgetFormState::default(),
            export_form: ExportFormState::default(),
        }
    }

    /// Recompute every aggregate from the session
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::generate(&self.session)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.selected_history_index = 0;
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// The category highlighted in the Budget Settings list
    pub fn selected_category(&self) -> Category {
        Category::ALL[self.selected_budget_index.min(Category::COUNT - 1)]
    }

    /// Open a dialog, resetting its form
    ///
    /// The export dialog stays closed while there is nothing to export.
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::new();
            }
            ActiveDialog::EditBudget(category) => {
                let current = self.session.budgets().limit(category);
                self.budget_form = BudgetFormState::init(category, current);
            }
            ActiveDialog::Export => {
                if !self.session.has_expenses() {
                    self.set_status("Nothing to export: no expenses recorded yet");
                    return;
                }
                self.export_form = ExportFormState::init(&self.settings.export_file_name);
            }
            ActiveDialog::Help | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Move selection up in the focused panel
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                self.selected_budget_index = self.selected_budget_index.saturating_sub(1);
            }
            FocusedPanel::Main => {
                self.selected_history_index = self.selected_history_index.saturating_sub(1);
            }
        }
    }

    /// Move selection down in the focused panel
    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                if self.selected_budget_index < Category::COUNT - 1 {
                    self.selected_budget_index += 1;
                }
            }
            FocusedPanel::Main => {
                let max = self.session.ledger().len();
                if self.selected_history_index < max.saturating_sub(1) {
                    self.selected_history_index += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_new_app_starts_empty() {
        let app = App::new(Settings::default());
        assert!(app.dashboard().is_empty());
        assert!(!app.has_dialog());
        assert_eq!(app.selected_category(), Category::Food);
    }

    #[test]
    fn test_export_blocked_while_empty() {
        let mut app = App::new(Settings::default());
        app.open_dialog(ActiveDialog::Export);

        assert!(!app.has_dialog());
        assert!(app.status_message.is_some());

        app.session.add_expense(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Category::Food,
            Money::from_dollars(20),
        );
        app.open_dialog(ActiveDialog::Export);
        assert_eq!(app.active_dialog, ActiveDialog::Export);
        assert_eq!(app.export_form.file_input.value(), "expenses.csv");
    }

    #[test]
    fn test_budget_selection_bounds() {
        let mut app = App::new(Settings::default());
        app.move_up();
        assert_eq!(app.selected_budget_index, 0);

        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_category(), Category::Utilities);
    }

    #[test]
    fn test_edit_budget_prefills_limit() {
        let mut app = App::new(Settings::default());
        app.session.set_limit(Category::Rent, Money::from_dollars(1200));

        app.open_dialog(ActiveDialog::EditBudget(Category::Rent));
        assert_eq!(app.budget_form.category, Category::Rent);
        assert_eq!(app.budget_form.limit_input.value(), "1200.00");
    }
}
