//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (budget settings, view switcher)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(32), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Title/header area
    pub header: Rect,
    /// Budget Settings list
    pub budgets: Rect,
    /// View switcher area
    pub view_switcher: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(9), // Budget Settings (five rows + total)
                Constraint::Min(5),    // View switcher
            ])
            .split(area);

        Self {
            header: chunks[0],
            budgets: chunks[1],
            view_switcher: chunks[2],
        }
    }
}

/// Layout for the main panel: key metrics above the active view
pub struct MainPanelLayout {
    /// Key metrics row
    pub metrics: Rect,
    /// Content area
    pub content: Rect,
}

impl MainPanelLayout {
    /// Calculate main panel layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Metrics
                Constraint::Min(3),    // Content
            ])
            .split(area);

        Self {
            metrics: chunks[0],
            content: chunks[1],
        }
    }
}

/// Two-by-two grid for the charts view
pub struct ChartsLayout {
    pub over_time: Rect,
    pub by_category: Rect,
    pub budget_vs_actual: Rect,
    pub distribution: Rect,
}

impl ChartsLayout {
    /// Calculate the chart grid
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        Self {
            over_time: top[0],
            by_category: top[1],
            budget_vs_actual: bottom[0],
            distribution: bottom[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
