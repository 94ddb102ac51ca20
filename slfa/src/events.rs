use crate::state::Page;
use slfa_data::players::PlayerId;
use slfa_data::Roster;
use std::path::PathBuf;
use std::sync::Arc;

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Navigation
    NavigateBack,
    NavigateTo(Page),

    // Data loading
    LoadRoster {
        force_refresh: bool,
    },

    // Search (filter mode)
    EnterFilterMode,
    ExitFilterMode,
    AppendFilterChar(char),
    DeleteFilterChar,
    ClearFilter,

    // Filter controls
    CyclePositionFilter,
    CycleClubFilter,
    CycleAgeFilter,
    ResetFilters,

    // Player profile
    ViewProfile {
        player_id: PlayerId,
    },
    DownloadCv {
        player_id: PlayerId,
    },
    ContactAgent {
        player_id: PlayerId,
    },
    ScrollDetail {
        down: bool,
    },

    // Matches
    DownloadFixtures,
    ShowTicketInfo,

    // Home
    OpenNewsItem,

    // Contact form
    EnterContactForm,
    ExitContactForm,
    NavigateContactField {
        forward: bool,
    },
    AppendContactChar(char),
    DeleteContactChar,
    SubmitContactForm,

    // Notices and help
    DismissNotice,
    ToggleHelp,

    // Log screen
    NavigateToLogs,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    RosterLoaded { roster: Arc<Roster> },

    // Text exports (CV, fixture list)
    ExportFinished { path: PathBuf },
    ExportFailed { file_name: String, error: String },

    // Errors
    LoadError { error: String },
}
