use crate::presentation::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let displayed = app.board.displayed();

    let items: Vec<ListItem> = if displayed.is_empty() {
        vec![ListItem::new("No challenges found.")]
    } else {
        displayed
            .iter()
            .enumerate()
            .map(|(idx, challenge)| {
                let selected = idx == app.cursor;
                let expanded = app.board.is_expanded(challenge.id());

                let prefix = if selected { "> " } else { "  " };
                let arrow = if expanded { "▼" } else { "▲" };

                let mut lines = vec![Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(
                        challenge.title(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(
                        "  Complete until {}  ",
                        challenge.deadline().formatted()
                    )),
                    Span::styled(arrow, Style::default().fg(Color::DarkGray)),
                ])];

                if expanded {
                    lines.push(Line::from(format!("    {}", challenge.description())));
                    lines.push(Line::styled(
                        format!("    [{}]", challenge.image().alt),
                        Style::default().fg(Color::DarkGray),
                    ));
                }

                let mut item = ListItem::new(lines);
                if selected {
                    item = item.style(Style::default().bg(Color::DarkGray));
                }
                item
            })
            .collect()
    };

    let title = format!("{} challenges", app.board.selected_type().label());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}
