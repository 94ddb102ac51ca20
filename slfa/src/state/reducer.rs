use super::{AppState, LoadingState, Notice, PlayersState};
use crate::events::DataEvent;
use crate::ui::screens::Screen;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        // Roster loaded: first render of the directory
        DataEvent::RosterLoaded { roster } => {
            match players_in_history(state) {
                Some(players) => {
                    tracing::debug!("Roster loaded with {} players", roster.len());
                    players.set_roster(roster);
                }
                None => tracing::debug!("Discarding roster, players screen is gone"),
            }
        }

        DataEvent::ExportFinished { path } => {
            let saved = format!("Saved to {}", path.display());
            match state.notice.as_mut() {
                Some(notice) => {
                    notice.body.push('\n');
                    notice.body.push_str(&saved);
                }
                None => state.show_notice(Notice::info("Download complete", saved)),
            }
        }

        DataEvent::ExportFailed { file_name, error } => {
            state.show_notice(Notice::error(format!(
                "Could not save {}: {}",
                file_name, error
            )));
        }

        DataEvent::LoadError { error } => {
            if let Some(players) = players_in_history(state) {
                if matches!(players.roster_loading, LoadingState::Loading(..)) {
                    players.roster_loading = LoadingState::Error(error);
                }
            }
        }
    }
}

/// Topmost players screen in the history.
///
/// It may no longer be on top if the user moved on while the roster loaded.
fn players_in_history(state: &mut AppState) -> Option<&mut PlayersState> {
    state.history.iter_mut().rev().find_map(|screen| match screen {
        Screen::Players(players) => Some(&mut **players),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NoticeKind, Page};
    use slfa_data::Roster;
    use std::path::PathBuf;
    use std::sync::Arc;
    use throbber_widgets_tui::ThrobberState;

    fn loading_state() -> AppState {
        let mut state = AppState::new();
        if let Some(players) = state.players_mut() {
            players.roster_loading = LoadingState::Loading(ThrobberState::default());
        }
        state
    }

    #[test]
    fn test_roster_loaded_renders_cards() {
        let mut state = loading_state();

        reduce_data_event(
            &mut state,
            DataEvent::RosterLoaded {
                roster: Arc::new(Roster::builtin()),
            },
        );

        let players = state.players().unwrap();
        assert_eq!(players.roster_loading, LoadingState::Loaded);
        assert_eq!(players.cards.len(), 4);
        assert_eq!(players.cards.table_state.borrow().selected(), Some(0));
        assert!(!players.selection.is_panel_visible());
    }

    #[test]
    fn test_roster_loaded_reaches_players_screen_below_top() {
        let mut state = loading_state();
        state.navigate_to(Page::Matches.screen());

        reduce_data_event(
            &mut state,
            DataEvent::RosterLoaded {
                roster: Arc::new(Roster::builtin()),
            },
        );

        assert!(state.navigate_back());
        assert_eq!(state.players().unwrap().cards.len(), 4);
    }

    #[test]
    fn test_roster_reload_collapses_open_profile() {
        let mut state = loading_state();
        let roster = Arc::new(Roster::builtin());
        reduce_data_event(
            &mut state,
            DataEvent::RosterLoaded {
                roster: roster.clone(),
            },
        );
        state.players_mut().unwrap().view_profile("musa-tombo");

        reduce_data_event(&mut state, DataEvent::RosterLoaded { roster });

        let players = state.players().unwrap();
        assert!(!players.selection.is_panel_visible());
        assert!(players.cards.expanded_ids().is_empty());
    }

    #[test]
    fn test_load_error_sets_error_state() {
        let mut state = loading_state();

        reduce_data_event(
            &mut state,
            DataEvent::LoadError {
                error: "roster.json: missing field `id`".to_string(),
            },
        );

        assert_eq!(
            state.players().unwrap().roster_loading,
            LoadingState::Error("roster.json: missing field `id`".to_string())
        );
    }

    #[test]
    fn test_load_error_reaches_players_screen_below_top() {
        let mut state = loading_state();
        state.navigate_to(Page::Matches.screen());

        reduce_data_event(
            &mut state,
            DataEvent::LoadError {
                error: "roster.json: expected value".to_string(),
            },
        );

        assert!(state.navigate_back());
        assert_eq!(
            state.players().unwrap().roster_loading,
            LoadingState::Error("roster.json: expected value".to_string())
        );
    }

    #[test]
    fn test_load_error_ignored_when_not_loading() {
        let mut state = AppState::new();

        reduce_data_event(
            &mut state,
            DataEvent::LoadError {
                error: "late".to_string(),
            },
        );

        assert_eq!(
            state.players().unwrap().roster_loading,
            LoadingState::NotStarted
        );
    }

    #[test]
    fn test_export_finished_extends_open_notice() {
        let mut state = AppState::new();
        state.show_notice(Notice::info("Download", "Downloading CV for Musa Tombo..."));

        reduce_data_event(
            &mut state,
            DataEvent::ExportFinished {
                path: PathBuf::from("/tmp/Musa_Tombo_CV.txt"),
            },
        );

        assert_eq!(
            state.notice.unwrap().body,
            "Downloading CV for Musa Tombo...\nSaved to /tmp/Musa_Tombo_CV.txt"
        );
    }

    #[test]
    fn test_export_finished_without_notice() {
        let mut state = AppState::new();

        reduce_data_event(
            &mut state,
            DataEvent::ExportFinished {
                path: PathBuf::from("out/SLFA_Full_Season_Fixture.txt"),
            },
        );

        let notice = state.notice.unwrap();
        assert_eq!(notice.title, "Download complete");
        assert_eq!(notice.body, "Saved to out/SLFA_Full_Season_Fixture.txt");
    }

    #[test]
    fn test_export_failed_shows_error() {
        let mut state = AppState::new();

        reduce_data_event(
            &mut state,
            DataEvent::ExportFailed {
                file_name: "Musa_Tombo_CV.txt".to_string(),
                error: "permission denied".to_string(),
            },
        );

        let notice = state.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(
            notice.body,
            "Could not save Musa_Tombo_CV.txt: permission denied"
        );
    }
}
