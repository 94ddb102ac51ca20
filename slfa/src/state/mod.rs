pub mod cards;
pub mod detail;
pub mod filter;
pub mod reducer;
pub mod selection;
pub mod validators;

use crate::ui::screens::Screen;
use cards::{CardList, PlayerCard};
use filter::{Choice, FilterCriteria, PositionFilter};
use ratatui::widgets::TableState;
use selection::{SelectionController, Transition};
use slfa_data::fixtures::{self, Fixture};
use slfa_data::news::{self, NewsItem};
use slfa_data::players::{AgeRange, PlayerId};
use slfa_data::Roster;
use std::cell::RefCell;
use std::sync::Arc;
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// Represents input mode for screens that accept text
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
    ContactForm,
}

/// Top-level pages shown in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Players,
    Matches,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Players, Page::Matches, Page::Contact];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Players => "Players",
            Self::Matches => "Matches",
            Self::Contact => "Contact",
        }
    }

    /// Fresh screen state for this page
    pub fn screen(&self) -> Screen {
        match self {
            Self::Home => Screen::Home(HomeState::default()),
            Self::Players => Screen::Players(Box::default()),
            Self::Matches => Screen::Matches(MatchesState::default()),
            Self::Contact => Screen::Contact(ContactFormState::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

/// A dismissable message shown on top of the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            body: body.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,
    pub notice: Option<Notice>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: vec![Page::Players.screen()],

            help_visible: false,
            pending_key: None,
            notice: None,

            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    pub fn current_page(&self) -> Option<Page> {
        self.current_screen().page()
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    pub fn players(&self) -> Option<&PlayersState> {
        match self.current_screen() {
            Screen::Players(state) => Some(state),
            _ => None,
        }
    }

    pub fn players_mut(&mut self) -> Option<&mut PlayersState> {
        match self.current_screen_mut() {
            Screen::Players(state) => Some(state),
            _ => None,
        }
    }

    pub fn show_notice(&mut self, notice: Notice) {
        tracing::debug!("Showing notice: {}", notice.title);
        self.notice = Some(notice);
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        if let Screen::Players(state) = self.current_screen_mut() {
            if let LoadingState::Loading(ref mut throbber_state) = state.roster_loading {
                return Some(throbber_state);
            }
        }
        None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Player directory: roster, filter controls, rendered cards and selection
#[derive(Default, Debug, Clone)]
pub struct PlayersState {
    pub roster: Arc<Roster>,
    pub roster_loading: LoadingState,
    pub input_mode: InputMode,

    // Filter controls
    pub search: String,
    pub position: Choice<PositionFilter>,
    pub club: Choice<String>,
    pub age_range: Choice<AgeRange>,

    pub cards: CardList,
    pub selection: SelectionController,
}

impl PlayersState {
    /// Snapshot of the controls for one filter pass
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            position: self.position.clone(),
            club: self.club.clone(),
            age_range: self.age_range.clone(),
        }
    }

    /// Filter the roster with the current controls and re-render the cards.
    /// Rendering always collapses the selection.
    pub fn refilter(&mut self) {
        let criteria = self.criteria();
        let visible = filter::filter(&self.roster, &criteria);
        self.cards.render(&visible);
        self.selection.reset();
    }

    /// Replace the roster and show it with the current controls
    pub fn set_roster(&mut self, roster: Arc<Roster>) {
        self.roster = roster;
        self.roster_loading = LoadingState::Loaded;
        self.refilter();
    }

    pub fn club_options(&self) -> Vec<String> {
        self.roster.clubs().into_iter().map(str::to_string).collect()
    }

    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.position = Choice::All;
        self.club = Choice::All;
        self.age_range = Choice::All;
        self.refilter();
    }

    pub fn view_profile(&mut self, player_id: &str) -> Transition {
        self.selection
            .activate(player_id, &self.roster, &mut self.cards)
    }

    pub fn highlighted_card(&self) -> Option<&PlayerCard> {
        self.cards.highlighted()
    }

    /// Target of the CV and agent actions: the player shown in the detail
    /// panel, else the highlighted card
    pub fn action_target(&self) -> Option<PlayerId> {
        self.selection
            .detail
            .download_cv_target
            .clone()
            .filter(|_| self.selection.is_panel_visible())
            .or_else(|| self.highlighted_card().map(|card| card.player_id.clone()))
    }
}

/// Home page: news teasers
#[derive(Debug, Clone)]
pub struct HomeState {
    pub news: Vec<NewsItem>,
    pub table_state: RefCell<TableState>,
}

impl Default for HomeState {
    fn default() -> Self {
        let news = news::latest_news();
        let selected = if news.is_empty() { None } else { Some(0) };
        Self {
            news,
            table_state: RefCell::new(TableState::default().with_selected(selected)),
        }
    }
}

impl HomeState {
    pub fn selected_news(&self) -> Option<&NewsItem> {
        let index = self.table_state.borrow().selected()?;
        self.news.get(index)
    }
}

/// Matches page: season fixtures
#[derive(Debug, Clone)]
pub struct MatchesState {
    pub fixtures: Vec<Fixture>,
    pub table_state: RefCell<TableState>,
}

impl Default for MatchesState {
    fn default() -> Self {
        let fixtures = fixtures::season_fixtures();
        let selected = if fixtures.is_empty() { None } else { Some(0) };
        Self {
            fixtures,
            table_state: RefCell::new(TableState::default().with_selected(selected)),
        }
    }
}

/// Fields of the contact form, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Message => "Message",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
            Self::Message => Self::Phone,
        }
    }
}

/// Contact page form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub current_field: ContactField,
    pub input_mode: InputMode,
    pub errors: Vec<(ContactField, String)>,
}

impl ContactFormState {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select(Some(num_items - 1));
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) == num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }
}

impl Scrollable for PlayersState {
    fn num_items(&self) -> usize {
        self.cards.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.cards.table_state
    }
}

impl Scrollable for HomeState {
    fn num_items(&self) -> usize {
        self.news.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for MatchesState {
    fn num_items(&self) -> usize {
        self.fixtures.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}
