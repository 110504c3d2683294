use crate::presentation::tui::app::App;
use challenges_core::ChallengeEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let shortcuts = if app.board.form().is_open() {
        "Type to edit | Tab: next field | ←/→: image | Enter: add | Esc: cancel"
    } else {
        "Tab: switch | j/k: select | Enter: details | c: complete | f: fail | a: add | q: quit"
    };

    let status = app
        .last_event
        .as_ref()
        .and_then(failure_notice)
        .map(|reason| format!(" | {}", reason))
        .unwrap_or_default();

    let paragraph = Paragraph::new(Line::from(format!("{}{}", shortcuts, status)))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(paragraph, area);
}

/// Reason to show for a failed command. Status updates on missing
/// challenges fail silently.
fn failure_notice(event: &ChallengeEvent) -> Option<&str> {
    match event {
        ChallengeEvent::CommandFailed { command, .. } if command == "UpdateChallengeStatus" => None,
        ChallengeEvent::CommandFailed { reason, .. } => Some(reason.as_str()),
        _ => None,
    }
}
