use crate::presentation::tui::app::App;
use challenges_core::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let form = app.board.form();
    let Some(draft) = form.draft() else {
        return;
    };
    let focus = app.form_input.focus();

    let label_style = |field: FormField| {
        if field == focus {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let text_row = |field: FormField, label: &'static str, value: &str| {
        let cursor = if field == focus { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:<12}", label), label_style(field)),
            Span::raw(format!("{}{}", value, cursor)),
        ])
    };

    let image = match form.selected_image() {
        Some(image) => format!("◀ {} ▶", image.alt),
        None => "◀ (none) ▶".to_string(),
    };

    let lines = vec![
        text_row(FormField::Title, "Title", &draft.title),
        Line::from(""),
        text_row(FormField::Description, "Description", &draft.description),
        Line::from(""),
        text_row(FormField::Deadline, "Deadline", &draft.deadline),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Image"), label_style(FormField::Image)),
            Span::raw(image),
        ]),
    ];

    let border = if app.is_shaking() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("New Challenge"),
    );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
