pub mod contact_screen;
pub mod home_screen;
pub mod logs_screen;
pub mod matches_screen;
pub mod players_screen;

use crate::state::{ContactFormState, HomeState, LogsState, MatchesState, Page, PlayersState};

#[derive(Debug, Clone)]
pub enum Screen {
    Home(HomeState),
    Players(Box<PlayersState>),
    Matches(MatchesState),
    Contact(ContactFormState),
    Logs(LogsState),
}

impl Screen {
    /// Navigation bar page of this screen; the logs screen has none
    pub fn page(&self) -> Option<Page> {
        match self {
            Self::Home(_) => Some(Page::Home),
            Self::Players(_) => Some(Page::Players),
            Self::Matches(_) => Some(Page::Matches),
            Self::Contact(_) => Some(Page::Contact),
            Self::Logs(_) => None,
        }
    }
}
