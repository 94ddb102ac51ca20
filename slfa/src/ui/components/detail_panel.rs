//! Player profile panel shown next to the card list.

use ratatui::{
    prelude::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::detail::DetailPanel;
use crate::ui::theme;

pub fn render_detail_panel(f: &mut Frame, area: Rect, detail: &DetailPanel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent_border_style())
        .title(Span::styled(
            format!(" {} ", detail.heading),
            theme::title_style(),
        ));

    let paragraph = Paragraph::new(detail_lines(detail))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((detail.scroll, 0));

    f.render_widget(paragraph, area);
}

fn field<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), theme::header_style()),
        Span::raw(value),
    ])
}

fn detail_lines(detail: &DetailPanel) -> Vec<Line<'_>> {
    let stats = &detail.stats;
    let stat_values = [
        ("Appearances", stats.appearances),
        ("Goals", stats.goals),
        ("Assists", stats.assists),
        ("Yellow cards", stats.yellow_cards),
        ("Red cards", stats.red_cards),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            format!("[{}] {}", detail.image_alt, detail.image_src),
            theme::muted_style(),
        )),
        Line::from(""),
        field("Position", &detail.position),
        field("Date of birth", &detail.dob),
        field("Club", &detail.club),
        field("Jersey", &detail.jersey_number),
        Line::from(""),
        Line::from(detail.bio.as_str()),
        Line::from(""),
        Line::from(Span::styled("Season statistics", theme::title_style())),
    ];

    lines.extend(stat_values.into_iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), theme::header_style()),
            Span::raw(value.to_string()),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "d: download CV | m: contact agent | Enter: close | PgUp/PgDn: scroll",
        theme::help_text_style(),
    )));

    lines
}
