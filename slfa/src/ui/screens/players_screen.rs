use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::cards::PlayerCard;
use crate::state::{InputMode, LoadingState, PlayersState};
use crate::ui::{
    components::{detail_panel, empty_state, filter_bar, help_bar, screen_title},
    layouts, theme,
};

pub fn render(f: &mut Frame, area: Rect, state: &PlayersState) {
    let (title_area, filter_area, content_area, help_area) =
        layouts::screen_layout_with_filter(area);

    screen_title::render_screen_title(f, title_area, "Our Players", &state.roster_loading);
    filter_bar::render_filter_bar(f, filter_area, state);

    if state.selection.is_panel_visible() {
        let (list_area, detail_area) = layouts::list_with_detail(content_area);
        render_cards(f, list_area, state);
        detail_panel::render_detail_panel(f, detail_area, &state.selection.detail);
    } else {
        render_cards(f, content_area, state);
    }

    let help_text = if state.input_mode == InputMode::Filter {
        help_bar::HELP_TEXT_PLAYERS_SEARCH
    } else {
        help_bar::HELP_TEXT_PLAYERS
    };
    help_bar::render_help_bar(f, help_area, help_text);
}

fn render_cards(f: &mut Frame, area: Rect, state: &PlayersState) {
    if state.roster.is_empty() {
        match &state.roster_loading {
            LoadingState::Error(error) => {
                empty_state::render_error_state(
                    f,
                    area,
                    "Players",
                    "Could not load the roster",
                    error,
                );
                return;
            }
            LoadingState::NotStarted | LoadingState::Loading(..) => {
                empty_state::render_loading_state(f, area, "Players", "Loading players...");
                return;
            }
            LoadingState::Loaded => {}
        }
    }

    if state.cards.is_empty() {
        let (message, hint) = if state.criteria().is_wildcard() {
            ("No players found", None)
        } else {
            ("No players match the current filters", Some("x: reset filters"))
        };
        empty_state::render_empty_state(f, area, "Players", message, hint);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Position"),
        Cell::from("Club"),
        Cell::from("Age"),
        Cell::from("Profile"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = state
        .cards
        .cards()
        .iter()
        .map(|card| card_row(card, state))
        .collect();

    let title = if state.criteria().is_wildcard() {
        format!("Players ({})", state.cards.len())
    } else {
        format!("Players ({} of {})", state.cards.len(), state.roster.len())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Length(7),
            Constraint::Min(14),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.cards.table_state.borrow_mut());
}

fn card_row<'a>(card: &'a PlayerCard, state: &'a PlayersState) -> Row<'a> {
    // Cards keep the club lower-cased for matching; show the roster's spelling
    let club = state
        .roster
        .find(card.player_id.as_str())
        .map(|player| player.club.as_str())
        .unwrap_or(card.club.as_str());

    let profile = if card.profile.expanded {
        Cell::from("▾ Viewing").style(theme::title_style())
    } else {
        Cell::from("▸ View profile").style(theme::help_text_style())
    };

    Row::new(vec![
        Cell::from(card.name.as_str()),
        Cell::from(card.position.as_str()),
        Cell::from(club),
        Cell::from(card.age_range.label()),
        profile,
    ])
}
