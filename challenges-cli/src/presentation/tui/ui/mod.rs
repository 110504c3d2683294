use super::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

mod board;
mod footer;
mod form;
mod header;

/// Main render function
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Challenges
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    header::render_header(f, chunks[0], app);
    board::render_board(f, chunks[1], app);
    footer::render_footer(f, chunks[2], app);

    if app.board.form().is_open() {
        form::render_form(f, centered(f.area(), 60, 14), app);
    }
}

/// A `width`% wide, `height` rows tall rectangle in the middle of `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width) / 2),
            Constraint::Percentage(width),
            Constraint::Percentage((100 - width) / 2),
        ])
        .split(vertical[1])[1]
}
