//! Top-level UI layout — cards row, filter bar, chart, status bar.

pub mod cards;
pub mod chart;
pub mod filter_bar;
pub mod overlays;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{AppState, Overlay};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // price cards
            Constraint::Length(4), // filter modes + legend
            Constraint::Min(5),    // chart
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    cards::render(f, chunks[0], app);
    filter_bar::render(f, chunks[1], app);
    chart::render(f, chunks[2], app);
    status_bar::render(f, chunks[3], app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, f.area()),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
