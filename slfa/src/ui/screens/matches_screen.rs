use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};
use slfa_data::fixtures::Fixture;

use crate::state::{LoadingState, MatchesState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts, theme,
};

pub fn render(f: &mut Frame, area: Rect, state: &MatchesState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    screen_title::render_screen_title(
        f,
        title_area,
        "Season Fixtures 2024/2025",
        &LoadingState::NotStarted,
    );
    render_fixtures(f, content_area, state);
    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_MATCHES);
}

fn render_fixtures(f: &mut Frame, area: Rect, state: &MatchesState) {
    if state.fixtures.is_empty() {
        empty_state::render_empty_state(f, area, "Fixtures", "No fixtures scheduled", None);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Opponent"),
        Cell::from("Competition"),
        Cell::from("Venue"),
        Cell::from(Text::from("Result").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = state.fixtures.iter().map(fixture_row).collect();

    let played = state.fixtures.iter().filter(|fixture| fixture.is_played()).count();
    let title = format!("Fixtures ({} played, {} to come)", played, state.fixtures.len() - played);

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

fn fixture_row(fixture: &Fixture) -> Row<'_> {
    let result_style = if fixture.is_played() {
        theme::title_style()
    } else {
        theme::muted_style()
    };

    Row::new(vec![
        Cell::from(fixture.date.as_str()),
        Cell::from(fixture.opponent.as_str()),
        Cell::from(fixture.competition.as_str()),
        Cell::from(fixture.venue.to_string()),
        Cell::from(Text::from(fixture.result_label()).right_aligned()).style(result_style),
    ])
}
