use crate::presentation::tui::app::App;
use challenges_core::ChallengeStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let counts = app.board.partition().counts();

    let titles: Vec<String> = ChallengeStatus::ALL
        .iter()
        .map(|status| format!("{} ({})", status.label(), counts.get(*status)))
        .collect();

    let selected = ChallengeStatus::ALL
        .iter()
        .position(|status| *status == app.board.selected_type())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your Challenges"),
        )
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}
