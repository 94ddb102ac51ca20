use crate::background::{loader::Loader, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::filter::PositionFilter;
use crate::state::validators::validate_contact_form;
use crate::state::*;
use crate::ui::screens::Screen;
use slfa_data::documents;
use slfa_data::fixtures;
use slfa_data::players::AgeRange;
use throbber_widgets_tui::ThrobberState;

/// Background work requested by a command after its state update
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundWork {
    LoadRoster { force_refresh: bool },
    Export { file_name: String, contents: String },
}

/// Execute a command: update state, then spawn any background work it needs
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    loader: &Loader,
) {
    let Some(work) = apply_command(command, state) else {
        return;
    };

    match work {
        BackgroundWork::LoadRoster { force_refresh } => {
            let loader = loader.clone();
            let future = async move {
                loader.load_roster(force_refresh).await;
            };

            task_manager.spawn_load_task("load_roster".to_string(), future);
        }
        BackgroundWork::Export {
            file_name,
            contents,
        } => {
            let loader = loader.clone();
            let task_id = format!("export_{}", file_name);
            let future = async move {
                loader.export_text(file_name, contents).await;
            };

            task_manager.spawn_load_task(task_id, future);
        }
    }
}

/// Synchronous command execution for testing (no background tasks)
///
/// State changes are identical to `execute_command`; requested background
/// work is dropped. Tests inject the corresponding `DataEvent`s instead.
///
/// NOTE: This is public for use by the testing module but should not be used in production code.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) -> Option<BackgroundWork> {
    let work = apply_command(command, state);
    if let Some(work) = &work {
        tracing::debug!("Skipping background work in sync mode: {:?}", work);
    }
    work
}

/// Apply a command to the state and report the background work it requests
fn apply_command(command: AppCommand, state: &mut AppState) -> Option<BackgroundWork> {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    let work = match command {
        // Simple state updates
        AppCommand::Quit => {
            state.should_quit = true;
            None
        }
        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
            None
        }
        AppCommand::DismissNotice => {
            state.notice = None;
            None
        }
        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
            None
        }
        AppCommand::ClearPendingKey => {
            state.pending_key = None;
            None
        }

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
            None
        }
        AppCommand::NavigateTo(page) => navigate_to_page(state, page),
        AppCommand::NavigateToLogs => {
            if !matches!(state.current_screen(), Screen::Logs(_)) {
                state.navigate_to(Screen::Logs(LogsState::default()));
            }
            None
        }

        AppCommand::SelectNext => {
            match state.current_screen_mut() {
                Screen::Players(s) => s.select_next(),
                Screen::Home(s) => s.select_next(),
                Screen::Matches(s) => s.select_next(),
                Screen::Contact(s) => s.current_field = s.current_field.next(),
                Screen::Logs(_) => {} // Uses scroll commands instead
            }
            None
        }
        AppCommand::SelectPrevious => {
            match state.current_screen_mut() {
                Screen::Players(s) => s.select_prev(),
                Screen::Home(s) => s.select_prev(),
                Screen::Matches(s) => s.select_prev(),
                Screen::Contact(s) => s.current_field = s.current_field.prev(),
                Screen::Logs(_) => {} // Uses scroll commands instead
            }
            None
        }
        AppCommand::NavigateToTop => {
            match state.current_screen_mut() {
                Screen::Players(s) => select_index(&**s, Some(0)),
                Screen::Home(s) => select_index(&*s, Some(0)),
                Screen::Matches(s) => select_index(&*s, Some(0)),
                Screen::Contact(s) => s.current_field = ContactField::Name,
                Screen::Logs(s) => s.scroll_offset = s.total_entries.saturating_sub(1),
            }
            None
        }
        AppCommand::NavigateToBottom => {
            match state.current_screen_mut() {
                Screen::Players(s) => select_last(&**s),
                Screen::Home(s) => select_last(&*s),
                Screen::Matches(s) => select_last(&*s),
                Screen::Contact(s) => s.current_field = ContactField::Message,
                Screen::Logs(s) => s.scroll_offset = 0,
            }
            None
        }

        // Data loading
        AppCommand::LoadRoster { force_refresh } => match state.players_mut() {
            Some(players) => {
                tracing::debug!("Refreshing players screen");
                players.roster_loading = LoadingState::Loading(ThrobberState::default());
                Some(BackgroundWork::LoadRoster { force_refresh })
            }
            None => None,
        },

        // Search (filter mode)
        AppCommand::EnterFilterMode => {
            if let Some(players) = state.players_mut() {
                players.input_mode = InputMode::Filter;
            }
            None
        }
        AppCommand::ExitFilterMode => {
            if let Some(players) = state.players_mut() {
                players.input_mode = InputMode::Normal;
            }
            None
        }
        AppCommand::AppendFilterChar(c) => {
            if let Some(players) = state.players_mut() {
                players.search.push(c);
                players.refilter();
            }
            None
        }
        AppCommand::DeleteFilterChar => {
            if let Some(players) = state.players_mut() {
                players.search.pop();
                players.refilter();
            }
            None
        }
        AppCommand::ClearFilter => {
            if let Some(players) = state.players_mut() {
                players.search.clear();
                players.input_mode = InputMode::Normal;
                players.refilter();
            }
            None
        }

        // Filter controls
        AppCommand::CyclePositionFilter => {
            if let Some(players) = state.players_mut() {
                players.position = players.position.cycle(&PositionFilter::ALL);
                tracing::debug!("Position filter: {}", players.position);
                players.refilter();
            }
            None
        }
        AppCommand::CycleClubFilter => {
            if let Some(players) = state.players_mut() {
                let options = players.club_options();
                players.club = players.club.cycle(&options);
                tracing::debug!("Club filter: {}", players.club);
                players.refilter();
            }
            None
        }
        AppCommand::CycleAgeFilter => {
            if let Some(players) = state.players_mut() {
                players.age_range = players.age_range.cycle(&AgeRange::ALL);
                tracing::debug!("Age filter: {}", players.age_range);
                players.refilter();
            }
            None
        }
        AppCommand::ResetFilters => {
            if let Some(players) = state.players_mut() {
                players.reset_filters();
            }
            None
        }

        // Player profile
        AppCommand::ViewProfile { player_id } => {
            if let Some(players) = state.players_mut() {
                let transition = players.view_profile(player_id.as_str());
                tracing::info!("View profile {}: {:?}", player_id, transition);
            }
            None
        }
        AppCommand::ScrollDetail { down } => {
            if let Some(players) = state.players_mut() {
                if players.selection.is_panel_visible() {
                    if down {
                        players.selection.detail.scroll_down();
                    } else {
                        players.selection.detail.scroll_up();
                    }
                }
            }
            None
        }
        AppCommand::DownloadCv { player_id } => {
            let found = state.players().map(|players| {
                players
                    .roster
                    .player(player_id.as_str())
                    .map(|player| {
                        (
                            player.name.clone(),
                            documents::cv_file_name(player),
                            documents::curriculum_vitae(player),
                        )
                    })
            });

            match found {
                Some(Ok((name, file_name, contents))) => {
                    tracing::info!("Downloading CV for {}", player_id);
                    state.show_notice(Notice::info(
                        "Download CV",
                        format!("Downloading CV for {}...", name),
                    ));
                    Some(BackgroundWork::Export {
                        file_name,
                        contents,
                    })
                }
                Some(Err(e)) => {
                    tracing::warn!("CV download rejected: {}", e);
                    state.show_notice(Notice::error("Error: Player data not found for download."));
                    None
                }
                None => None,
            }
        }
        AppCommand::ContactAgent { player_id } => {
            let found = state.players().map(|players| {
                players
                    .roster
                    .agent(player_id.as_str())
                    .map(|(player, agent)| documents::agent_contact(player, agent))
            });

            match found {
                Some(Ok(contact)) => {
                    tracing::info!("Showing agent contact for {}", player_id);
                    state.show_notice(Notice::info("Contact agent", contact));
                }
                Some(Err(e)) => {
                    tracing::warn!("Agent lookup rejected: {}", e);
                    state.show_notice(Notice::error(
                        "Agent information not available for this player.",
                    ));
                }
                None => {}
            }
            None
        }

        // Matches
        AppCommand::DownloadFixtures => match state.current_screen() {
            Screen::Matches(matches) => {
                let contents = fixtures::fixture_sheet(&matches.fixtures);
                tracing::info!("Downloading fixture list");
                state.show_notice(Notice::info(
                    "Download fixtures",
                    format!(
                        "The full season fixture list is downloading now. (File: {})",
                        fixtures::FIXTURE_FILE_NAME
                    ),
                ));
                Some(BackgroundWork::Export {
                    file_name: fixtures::FIXTURE_FILE_NAME.to_string(),
                    contents,
                })
            }
            _ => None,
        },
        AppCommand::ShowTicketInfo => {
            state.show_notice(Notice::info(
                "Ticket information",
                fixtures::ticket_information(),
            ));
            None
        }

        // Home
        AppCommand::OpenNewsItem => {
            let article = match state.current_screen() {
                Screen::Home(home) => home.selected_news().map(|item| {
                    Notice::info(
                        item.title.clone(),
                        format!("{}\n\n{}", item.date, item.body),
                    )
                }),
                _ => None,
            };
            if let Some(article) = article {
                state.show_notice(article);
            }
            None
        }

        // Contact form
        AppCommand::EnterContactForm => {
            if let Screen::Contact(form) = state.current_screen_mut() {
                form.input_mode = InputMode::ContactForm;
            }
            None
        }
        AppCommand::ExitContactForm => {
            if let Screen::Contact(form) = state.current_screen_mut() {
                form.input_mode = InputMode::Normal;
            }
            None
        }
        AppCommand::NavigateContactField { forward } => {
            if let Screen::Contact(form) = state.current_screen_mut() {
                form.current_field = if forward {
                    form.current_field.next()
                } else {
                    form.current_field.prev()
                };
            }
            None
        }
        AppCommand::AppendContactChar(c) => {
            if let Screen::Contact(form) = state.current_screen_mut() {
                let field = form.current_field;
                form.value_mut(field).push(c);
            }
            None
        }
        AppCommand::DeleteContactChar => {
            if let Screen::Contact(form) = state.current_screen_mut() {
                let field = form.current_field;
                form.value_mut(field).pop();
            }
            None
        }
        AppCommand::SubmitContactForm => {
            let submitted = match state.current_screen_mut() {
                Screen::Contact(form) => match validate_contact_form(form) {
                    Ok(submission) => {
                        tracing::info!("Contact form submitted by {}", submission.name);
                        *form = ContactFormState::default();
                        true
                    }
                    Err(errors) => {
                        tracing::debug!("Contact form rejected with {} errors", errors.len());
                        if let Some((field, _)) = errors.first() {
                            form.current_field = *field;
                        }
                        form.errors = errors;
                        false
                    }
                },
                _ => false,
            };
            if submitted {
                state.show_notice(Notice::info(
                    "Thank you",
                    "Thank you for your inquiry! Your form has been submitted successfully.",
                ));
            }
            None
        }

        // Log screen
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
            None
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
            None
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = (s.scroll_offset + 20).min(s.total_entries.saturating_sub(1));
            }
            None
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(20);
            }
            None
        }
        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.total_entries.saturating_sub(1);
            }
            None
        }
        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = 0;
            }
            None
        }
    };

    // Clear pending key after any command except SetPendingKey
    // This ensures multi-key sequences are properly reset after completion
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }

    work
}

fn navigate_to_page(state: &mut AppState, page: Page) -> Option<BackgroundWork> {
    if state.current_page() == Some(page) {
        tracing::debug!("Already on {} page", page.title());
        return None;
    }

    tracing::debug!("Navigating to {} page", page.title());
    state.navigate_to(page.screen());

    // Each activation of the players page loads its own roster
    let players = state.players_mut()?;
    players.roster_loading = LoadingState::Loading(ThrobberState::default());
    Some(BackgroundWork::LoadRoster {
        force_refresh: false,
    })
}

fn select_index(scrollable: &impl Scrollable, index: Option<usize>) {
    let index = index.filter(|_| scrollable.num_items() > 0);
    scrollable.table_state().borrow_mut().select(index);
}

fn select_last(scrollable: &impl Scrollable) {
    let last = scrollable.num_items().checked_sub(1);
    scrollable.table_state().borrow_mut().select(last);
}

#[cfg(test)]
mod tests {
    use super::*;
    use slfa_data::Roster;
    use std::sync::Arc;

    fn players_state() -> AppState {
        let mut state = AppState::new();
        if let Some(players) = state.players_mut() {
            players.set_roster(Arc::new(Roster::builtin()));
        }
        state
    }

    fn card_names(state: &AppState) -> Vec<String> {
        state
            .players()
            .unwrap()
            .cards
            .cards()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    #[test]
    fn test_load_roster_requests_background_work() {
        let mut state = AppState::new();
        let work = execute_command_sync(AppCommand::LoadRoster { force_refresh: true }, &mut state);

        assert_eq!(work, Some(BackgroundWork::LoadRoster { force_refresh: true }));
        assert!(matches!(
            state.players().unwrap().roster_loading,
            LoadingState::Loading(_)
        ));
    }

    #[test]
    fn test_load_roster_outside_players_screen_is_ignored() {
        let mut state = AppState::new();
        execute_command_sync(AppCommand::NavigateTo(Page::Home), &mut state);

        let work = execute_command_sync(AppCommand::LoadRoster { force_refresh: false }, &mut state);
        assert_eq!(work, None);
    }

    #[test]
    fn test_navigate_to_players_loads_roster() {
        let mut state = AppState::new();
        assert_eq!(
            execute_command_sync(AppCommand::NavigateTo(Page::Matches), &mut state),
            None
        );
        assert_eq!(state.current_page(), Some(Page::Matches));

        let work = execute_command_sync(AppCommand::NavigateTo(Page::Players), &mut state);
        assert_eq!(
            work,
            Some(BackgroundWork::LoadRoster {
                force_refresh: false
            })
        );
        assert_eq!(state.history.len(), 3);
    }

    #[test]
    fn test_navigate_to_current_page_is_noop() {
        let mut state = players_state();
        let work = execute_command_sync(AppCommand::NavigateTo(Page::Players), &mut state);

        assert_eq!(work, None);
        assert_eq!(state.history.len(), 1);
        assert_eq!(card_names(&state).len(), 4);
    }

    #[test]
    fn test_typing_search_filters_live() {
        let mut state = players_state();
        execute_command_sync(AppCommand::EnterFilterMode, &mut state);
        for c in "kamara".chars() {
            execute_command_sync(AppCommand::AppendFilterChar(c), &mut state);
        }

        assert_eq!(card_names(&state), ["Mohamed Kamara", "Alhaji Kamara"]);

        execute_command_sync(AppCommand::ClearFilter, &mut state);
        assert_eq!(card_names(&state).len(), 4);
        assert_eq!(state.players().unwrap().input_mode, InputMode::Normal);
    }

    #[test]
    fn test_cycle_position_to_defender() {
        let mut state = players_state();
        execute_command_sync(AppCommand::CyclePositionFilter, &mut state);
        assert_eq!(card_names(&state), ["Alhaji Kamara"]);

        execute_command_sync(AppCommand::CyclePositionFilter, &mut state);
        assert_eq!(card_names(&state), ["Umaru Bangura"]);
    }

    #[test]
    fn test_cycle_club_and_age() {
        let mut state = players_state();
        execute_command_sync(AppCommand::CycleClubFilter, &mut state);
        assert_eq!(card_names(&state), ["Musa Tombo"]);

        execute_command_sync(AppCommand::CycleAgeFilter, &mut state);
        assert!(card_names(&state).is_empty());

        execute_command_sync(AppCommand::ResetFilters, &mut state);
        assert_eq!(card_names(&state).len(), 4);
    }

    #[test]
    fn test_filter_change_collapses_profile() {
        let mut state = players_state();
        execute_command_sync(
            AppCommand::ViewProfile {
                player_id: "musa-tombo".into(),
            },
            &mut state,
        );
        assert!(state.players().unwrap().selection.is_panel_visible());

        execute_command_sync(AppCommand::CycleAgeFilter, &mut state);
        assert!(!state.players().unwrap().selection.is_panel_visible());
    }

    #[test]
    fn test_download_cv_for_known_player() {
        let mut state = players_state();
        let work = execute_command_sync(
            AppCommand::DownloadCv {
                player_id: "mohamed-kamara".into(),
            },
            &mut state,
        );

        let Some(BackgroundWork::Export {
            file_name,
            contents,
        }) = work
        else {
            panic!("Expected export work");
        };
        assert_eq!(file_name, "Mohamed_Kamara_CV.txt");
        assert!(contents.contains("Name: Mohamed Kamara (The Hunter)"));
        assert_eq!(
            state.notice.unwrap().body,
            "Downloading CV for Mohamed Kamara..."
        );
    }

    #[test]
    fn test_download_cv_for_unknown_player() {
        let mut state = players_state();
        let work = execute_command_sync(
            AppCommand::DownloadCv {
                player_id: "steven-caulker".into(),
            },
            &mut state,
        );

        assert_eq!(work, None);
        let notice = state.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.body, "Error: Player data not found for download.");
    }

    #[test]
    fn test_contact_agent() {
        let mut state = players_state();
        execute_command_sync(
            AppCommand::ContactAgent {
                player_id: "umaru-bangura".into(),
            },
            &mut state,
        );
        assert!(state
            .notice
            .as_ref()
            .unwrap()
            .body
            .contains("Agent Name: Fatmata Davies"));

        execute_command_sync(AppCommand::DismissNotice, &mut state);
        assert!(state.notice.is_none());

        execute_command_sync(
            AppCommand::ContactAgent {
                player_id: "steven-caulker".into(),
            },
            &mut state,
        );
        assert_eq!(
            state.notice.unwrap().body,
            "Agent information not available for this player."
        );
    }

    #[test]
    fn test_scroll_detail_only_when_visible() {
        let mut state = players_state();
        execute_command_sync(AppCommand::ScrollDetail { down: true }, &mut state);
        assert_eq!(state.players().unwrap().selection.detail.scroll, 0);

        execute_command_sync(
            AppCommand::ViewProfile {
                player_id: "alhaji-kamara".into(),
            },
            &mut state,
        );
        execute_command_sync(AppCommand::ScrollDetail { down: true }, &mut state);
        assert_eq!(state.players().unwrap().selection.detail.scroll, 3);
    }

    #[test]
    fn test_download_fixtures() {
        let mut state = AppState::new();
        execute_command_sync(AppCommand::NavigateTo(Page::Matches), &mut state);

        let work = execute_command_sync(AppCommand::DownloadFixtures, &mut state);

        let Some(BackgroundWork::Export { file_name, contents }) = work else {
            panic!("Expected export work");
        };
        assert_eq!(file_name, "SLFA_Full_Season_Fixture.txt");
        assert!(contents.contains("Bhantal FC"));
        assert!(state.notice.unwrap().body.contains("downloading now"));
    }

    #[test]
    fn test_open_news_item() {
        let mut state = AppState::new();
        execute_command_sync(AppCommand::NavigateTo(Page::Home), &mut state);
        execute_command_sync(AppCommand::SelectNext, &mut state);
        execute_command_sync(AppCommand::OpenNewsItem, &mut state);

        let notice = state.notice.unwrap();
        assert_eq!(notice.title, "SLFA Youth Academy Signs 10 New Talents");
        assert!(notice.body.starts_with("05 December 2025\n\n"));
    }

    #[test]
    fn test_contact_form_rejects_then_accepts() {
        let mut state = AppState::new();
        execute_command_sync(AppCommand::NavigateTo(Page::Contact), &mut state);
        execute_command_sync(AppCommand::EnterContactForm, &mut state);

        execute_command_sync(AppCommand::SubmitContactForm, &mut state);
        let Screen::Contact(form) = state.current_screen() else {
            panic!("Expected Contact screen");
        };
        assert_eq!(form.errors.len(), 3);
        assert!(form.error_for(ContactField::Phone).is_none());
        assert!(state.notice.is_none());

        let entries = [
            "Fatu Sesay",
            "fatu@example.sl",
            "+232 76 000 000",
            "Do you sell away tickets?",
        ];
        execute_command_sync(AppCommand::NavigateToTop, &mut state);
        for entry in entries {
            for c in entry.chars() {
                execute_command_sync(AppCommand::AppendContactChar(c), &mut state);
            }
            execute_command_sync(AppCommand::NavigateContactField { forward: true }, &mut state);
        }
        execute_command_sync(AppCommand::SubmitContactForm, &mut state);

        let Screen::Contact(form) = state.current_screen() else {
            panic!("Expected Contact screen");
        };
        assert_eq!(form, &ContactFormState::default());
        assert_eq!(
            state.notice.unwrap().body,
            "Thank you for your inquiry! Your form has been submitted successfully."
        );
    }

    #[test]
    fn test_pending_key_cleared_after_command() {
        let mut state = players_state();
        execute_command_sync(AppCommand::SetPendingKey('g'), &mut state);
        assert_eq!(state.pending_key, Some('g'));

        execute_command_sync(AppCommand::NavigateToTop, &mut state);
        assert_eq!(state.pending_key, None);
    }

    #[test]
    fn test_navigate_to_bottom_and_top() {
        let mut state = players_state();
        execute_command_sync(AppCommand::NavigateToBottom, &mut state);
        assert_eq!(
            state.players().unwrap().highlighted_card().unwrap().name,
            "Umaru Bangura"
        );

        execute_command_sync(AppCommand::NavigateToTop, &mut state);
        assert_eq!(
            state.players().unwrap().highlighted_card().unwrap().name,
            "Musa Tombo"
        );
    }
}
