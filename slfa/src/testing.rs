use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor::{self, BackgroundWork};
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, PlayersState};
use crate::ui::screens::Screen;
use slfa_data::Roster;
use std::sync::Arc;

/// Mock data event handler for tests (no real async tasks)
///
/// Commands run through execute_command_sync. Background work they request
/// is recorded instead of spawned so tests can assert on it.
#[derive(Default)]
pub struct MockDataHandler {
    pub requested_work: Vec<BackgroundWork>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if let Some(work) = executor::execute_command_sync(command, state) {
            self.requested_work.push(work);
        }
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    /// Test app with the built-in roster already delivered
    pub fn with_builtin_roster() -> Self {
        let mut app = Self::new();
        app.load_roster(Roster::builtin());
        app
    }

    /// Deliver a roster as the loader would
    pub fn load_roster(&mut self, roster: Roster) {
        self.send_data_event(DataEvent::RosterLoaded {
            roster: Arc::new(roster),
        });
    }

    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Send each character of `text` as a key press
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    pub fn send_command(&mut self, command: AppCommand) {
        self.core.handle_command(command);
    }

    /// Inject a data event (simulate a loader result)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Players screen state, panicking if it is not on top
    pub fn players(&self) -> &PlayersState {
        match self.state().current_screen() {
            Screen::Players(players) => players,
            other => panic!("Expected players screen, got {:?}", other),
        }
    }

    /// Background work requested so far, oldest first
    pub fn requested_work(&self) -> &[BackgroundWork] {
        &self.core.handler().requested_work
    }

    /// Assert that the app is on a specific screen type
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
