pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use components::{help_popup, nav_tabs, notice_popup};
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher: frame chrome, the current screen, then overlays.
/// Never mutates state.
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    let (nav_area, body_area, footer_area) = layouts::app_layout(f.area());

    nav_tabs::render_nav_tabs(f, nav_area, state.current_page());

    match state.current_screen() {
        Screen::Home(home_state) => home_screen::render(f, body_area, home_state),
        Screen::Players(players_state) => players_screen::render(f, body_area, players_state),
        Screen::Matches(matches_state) => matches_screen::render(f, body_area, matches_state),
        Screen::Contact(form_state) => contact_screen::render(f, body_area, form_state),
        Screen::Logs(logs_state) => logs_screen::render(f, body_area, logs_state, log_buffer),
    }

    nav_tabs::render_footer(f, footer_area, utils::current_year());

    if state.help_visible {
        help_popup::render_help_popup(f, state.current_screen());
    }

    // Notices sit above everything, help included
    if let Some(notice) = &state.notice {
        notice_popup::render_notice_popup(f, notice);
    }
}
