//! Centralized theme constants and style functions for consistent UI styling.
//!
//! Colours follow the association's green, white and blue. All screens and
//! components take their colours and layout constants from here.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Association green: active tab, titles, positive results
pub const COLOR_PRIMARY: Color = Color::Rgb(0x1e, 0xb5, 0x3a);

/// Association blue: borders and accents
pub const COLOR_ACCENT: Color = Color::Rgb(0x00, 0x72, 0xc6);

/// Color for errors and failed validation
pub const COLOR_ERROR: Color = Color::Red;

/// Color for muted text (unplayed fixtures, trace logs)
pub const COLOR_MUTED: Color = Color::DarkGray;

/// Background color for selected/highlighted rows
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for table headers
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Background for form fields when focused
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the navigation tab bar
pub const NAV_HEIGHT: u16 = 1;

/// Height of the copyright footer
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of the player filter bar
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Share of the players content area given to the detail panel
pub const DETAIL_PANEL_PERCENT: u16 = 45;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for selected/highlighted rows in tables and lists
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

pub fn error_style() -> Style {
    Style::default().fg(COLOR_ERROR)
}

pub fn muted_style() -> Style {
    Style::default().fg(COLOR_MUTED)
}

/// Active entry of the navigation bar
pub fn active_tab_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when focused
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

/// Border of error notices
pub fn danger_border_style() -> Style {
    Style::default()
        .fg(COLOR_ERROR)
        .add_modifier(Modifier::BOLD)
}

/// Border of informational notices
pub fn info_border_style() -> Style {
    Style::default()
        .fg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_ACCENT)
}
