use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: An open notice swallows everything but dismiss and quit
    if state.notice.is_some() {
        return match key {
            Key::Enter | Key::Esc => Some(AppCommand::DismissNotice),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 1: Text entry (search box, contact form)
    match state.current_screen() {
        Screen::Players(players) if players.input_mode == InputMode::Filter => {
            return match key {
                Key::Enter => Some(AppCommand::ExitFilterMode),
                Key::Backspace => Some(AppCommand::DeleteFilterChar),
                Key::Char(c) => Some(AppCommand::AppendFilterChar(c)),
                Key::Esc => Some(AppCommand::ClearFilter),
                _ => None,
            };
        }
        Screen::Contact(form) if form.input_mode == InputMode::ContactForm => {
            return handle_contact_form_keys(event);
        }
        _ => {}
    }

    // Priority 2: Check if we're currently showing the help popup
    // This must come before screen-specific Esc handling so help popup takes precedence
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 3: Screen-specific Esc handling (clear search when not typing)
    if let (Screen::Players(_), Key::Esc) = (state.current_screen(), key) {
        return Some(AppCommand::ClearFilter);
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        // We have a pending key, handle the second key in the sequence
        return match (pending, key) {
            ('g', Key::Char('h')) => Some(AppCommand::NavigateTo(Page::Home)),
            ('g', Key::Char('p')) => Some(AppCommand::NavigateTo(Page::Players)),
            ('g', Key::Char('m')) => Some(AppCommand::NavigateTo(Page::Matches)),
            ('g', Key::Char('c')) => Some(AppCommand::NavigateTo(Page::Contact)),
            // 'g' followed by 'g' -> navigate to top of table
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            // 'g' followed by 'l' -> go to logs
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Global quit command
        (_, Key::Char('q')) => Some(AppCommand::Quit),

        // Multi-key sequence initiator: 'g' sets pending key
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        // Navigate to bottom: 'G' (Shift+g)
        (_, Key::Char('G')) => Some(AppCommand::NavigateToBottom),

        // Global back navigation (left/h)
        (_, Key::Left | Key::Char('h')) => Some(AppCommand::NavigateBack),

        // Navigation bar shortcuts
        (_, Key::Char(c @ '1'..='4')) => {
            let index = c as usize - '1' as usize;
            Page::ALL.get(index).copied().map(AppCommand::NavigateTo)
        }

        // Players screen
        (Screen::Players(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Players(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Players(..), Key::Char('/')) => Some(AppCommand::EnterFilterMode),
        (Screen::Players(..), Key::Char('p')) => Some(AppCommand::CyclePositionFilter),
        (Screen::Players(..), Key::Char('c')) => Some(AppCommand::CycleClubFilter),
        (Screen::Players(..), Key::Char('y')) => Some(AppCommand::CycleAgeFilter),
        (Screen::Players(..), Key::Char('x')) => Some(AppCommand::ResetFilters),
        (Screen::Players(players), Key::Enter | Key::Right | Key::Char('l')) => {
            // Resolved against the cards rendered right now
            players
                .highlighted_card()
                .map(|card| AppCommand::ViewProfile {
                    player_id: card.player_id.clone(),
                })
        }
        (Screen::Players(players), Key::Char('d')) => players
            .action_target()
            .map(|player_id| AppCommand::DownloadCv { player_id }),
        (Screen::Players(players), Key::Char('m')) => players
            .action_target()
            .map(|player_id| AppCommand::ContactAgent { player_id }),
        (Screen::Players(..), Key::PageDown) => Some(AppCommand::ScrollDetail { down: true }),
        (Screen::Players(..), Key::PageUp) => Some(AppCommand::ScrollDetail { down: false }),
        (Screen::Players(..), Key::Char('r')) => Some(AppCommand::LoadRoster {
            force_refresh: true,
        }),

        // Matches screen
        (Screen::Matches(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Matches(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Matches(..), Key::Char('d')) => Some(AppCommand::DownloadFixtures),
        (Screen::Matches(..), Key::Char('t')) => Some(AppCommand::ShowTicketInfo),

        // Home screen
        (Screen::Home(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Home(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Home(..), Key::Enter | Key::Right | Key::Char('l')) => {
            Some(AppCommand::OpenNewsItem)
        }

        // Contact screen
        (Screen::Contact(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Contact(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Contact(..), Key::Enter | Key::Char('i')) => Some(AppCommand::EnterContactForm),

        // Logs screen
        (Screen::Logs(..), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(..), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(..), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(..), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),

        // Ignore other keys
        _ => None,
    }
}

/// Handle keyboard input while editing the contact form
fn handle_contact_form_keys(event: KeyEvent) -> Option<AppCommand> {
    match event.key {
        Key::Esc => Some(AppCommand::ExitContactForm),
        Key::Tab | Key::Down => Some(AppCommand::NavigateContactField { forward: true }),
        Key::BackTab | Key::Up => Some(AppCommand::NavigateContactField { forward: false }),
        Key::Enter => Some(AppCommand::SubmitContactForm),
        Key::Backspace => Some(AppCommand::DeleteContactChar),
        Key::Char(c) if !event.modifiers.ctrl => Some(AppCommand::AppendContactChar(c)),
        _ => None,
    }
}
