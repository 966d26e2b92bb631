//! Application state management
//!
//! Handles screen transitions, navigation signals, and keyboard event
//! mapping for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Main menu with Play, Tutorial, Quit
    #[default]
    Menu,
    /// Quiz rounds
    Game,
    /// Paginated explanation of each operation
    Tutorial,
}

/// Navigation request returned by a screen after handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenSignal {
    Play,
    Tutorial,
    Menu,
    Quit,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection or start a round (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Pick answer option 1-4 (zero-based index)
    Choose(usize),
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug, Default)]
pub struct StateManager {
    current_state: AppState,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the main menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current application state
    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            debug!("screen {:?} -> {:?}", self.current_state, new_state);
            self.current_state = new_state;
        }
    }

    /// Apply a navigation signal returned by the active screen
    pub fn apply(&mut self, signal: ScreenSignal) {
        match signal {
            ScreenSignal::Play => self.transition_to(AppState::Game),
            ScreenSignal::Tutorial => self.transition_to(AppState::Tutorial),
            ScreenSignal::Menu => self.transition_to(AppState::Menu),
            ScreenSignal::Quit => self.quit(),
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            // Answer options
            KeyCode::Char(c @ '1'..='4') => NavigationAction::Choose(c as usize - '1' as usize),

            _ => NavigationAction::None,
        }
    }
}
