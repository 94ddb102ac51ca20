use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{ContactField, ContactFormState, InputMode, LoadingState};
use crate::ui::{
    components::{help_bar, screen_title},
    layouts, theme,
};

const ADDRESS: &str = "SLFA Secretariat, Siaka Stevens Stadium, Freetown\n\
                       Email: info@slfa.sl | Phone: +232 76 000 000";

pub fn render(f: &mut Frame, area: Rect, state: &ContactFormState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    screen_title::render_screen_title(f, title_area, "Contact Us", &LoadingState::NotStarted);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(content_area);

    let address = Paragraph::new(ADDRESS)
        .style(theme::help_text_style())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(address, chunks[0]);

    let editing = state.input_mode == InputMode::ContactForm;
    for (field, field_area) in ContactField::ALL.into_iter().zip(chunks.iter().skip(1)) {
        render_field(f, *field_area, state, field, editing);
    }

    let help_text = if editing {
        help_bar::HELP_TEXT_CONTACT_EDITING
    } else {
        help_bar::HELP_TEXT_CONTACT
    };
    help_bar::render_help_bar(f, help_area, help_text);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    state: &ContactFormState,
    field: ContactField,
    editing: bool,
) {
    let focused = state.current_field == field;
    let error = state.error_for(field);

    let value = state.value(field);
    let text = if focused && editing {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    let title = match (field, error) {
        (_, Some(message)) => Line::from(vec![
            Span::raw(format!("{} ", field.label())),
            Span::styled(message, theme::error_style()),
        ]),
        (ContactField::Phone, None) => Line::from("Phone (optional)"),
        (_, None) => Line::from(field.label()),
    };

    let border_style = if error.is_some() {
        theme::danger_border_style()
    } else if focused {
        theme::loading_style()
    } else {
        theme::accent_border_style()
    };

    let style = if focused && editing {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    let input = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );

    f.render_widget(input, area);
}
