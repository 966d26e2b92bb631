//! Screen controller
//!
//! Owns the active-screen state, the game session and the three screens.
//! Input events go to whichever screen is active; the signal it returns
//! decides the next screen.

use crate::{
    app::{
        screens::{GameScreen, MenuScreen, TutorialScreen},
        state::{AppState, NavigationAction, ScreenSignal, StateManager},
    },
    quiz::{GameSession, TickOutcome},
    Result,
};
use crossterm::event::{Event, MouseEventKind};
use log::info;
use rand::{rngs::SmallRng, Rng};
use ratatui::Frame;

/// Routes input, updates and rendering to the active screen
#[derive(Debug)]
pub struct ScreenController<R = SmallRng> {
    state_manager: StateManager,
    session: GameSession<R>,
    menu_screen: MenuScreen,
    game_screen: GameScreen,
    tutorial_screen: TutorialScreen,
    /// Last known mouse position, for hover highlighting
    pointer: Option<(u16, u16)>,
}

impl<R: Rng> ScreenController<R> {
    /// Create a controller showing the menu
    pub fn new(session: GameSession<R>) -> Self {
        Self {
            state_manager: StateManager::new(),
            session,
            menu_screen: MenuScreen::new(),
            game_screen: GameScreen::new(),
            tutorial_screen: TutorialScreen::new(),
            pointer: None,
        }
    }

    pub fn current_state(&self) -> AppState {
        self.state_manager.current_state()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn menu_screen(&self) -> &MenuScreen {
        &self.menu_screen
    }

    pub fn game_screen(&self) -> &GameScreen {
        &self.game_screen
    }

    pub fn tutorial_screen(&self) -> &TutorialScreen {
        &self.tutorial_screen
    }

    /// Handle one terminal event at time `now_ms`
    pub fn handle_event(&mut self, event: &Event, now_ms: u64) -> Result<()> {
        match event {
            Event::Key(key) => {
                if StateManager::key_to_navigation(*key) == NavigationAction::Quit {
                    self.apply(ScreenSignal::Quit);
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                if matches!(
                    mouse.kind,
                    MouseEventKind::Moved | MouseEventKind::Down(_) | MouseEventKind::Drag(_)
                ) {
                    self.pointer = Some((mouse.column, mouse.row));
                }
            }
            _ => {}
        }

        let signal = match self.state_manager.current_state() {
            AppState::Menu => self.menu_screen.handle_event(event),
            AppState::Game => self
                .game_screen
                .handle_event(event, &mut self.session, now_ms)?,
            AppState::Tutorial => self.tutorial_screen.handle_event(event),
        };

        if let Some(signal) = signal {
            self.apply(signal);
        }
        Ok(())
    }

    /// Advance session timers
    pub fn update(&mut self, now_ms: u64) -> Result<TickOutcome> {
        self.session.tick(now_ms)
    }

    /// Draw the active screen
    pub fn render(&mut self, f: &mut Frame) {
        match self.state_manager.current_state() {
            AppState::Menu => self.menu_screen.render(f, self.pointer),
            AppState::Game => self.game_screen.render(f, &self.session, self.pointer),
            AppState::Tutorial => self.tutorial_screen.render(f, self.pointer),
        }
    }

    fn apply(&mut self, signal: ScreenSignal) {
        if matches!(signal, ScreenSignal::Menu | ScreenSignal::Quit) {
            self.session.stop();
        }
        if signal == ScreenSignal::Quit {
            info!("quit requested");
        }
        self.state_manager.apply(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{QuestionGenerator, RoundRules};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn controller() -> ScreenController {
        ScreenController::new(GameSession::new(
            QuestionGenerator::with_seed(8),
            RoundRules::default(),
        ))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_starts_on_menu() {
        let controller = controller();
        assert_eq!(controller.current_state(), AppState::Menu);
        assert!(!controller.should_quit());
    }

    #[test]
    fn test_quit_key_works_on_every_screen() {
        let mut controller = controller();
        controller.handle_event(&key(KeyCode::Enter), 0).unwrap();
        assert_eq!(controller.current_state(), AppState::Game);
        controller.handle_event(&key(KeyCode::Char(' ')), 0).unwrap();
        assert!(controller.session().is_active());

        controller.handle_event(&key(KeyCode::Char('q')), 10).unwrap();
        assert!(controller.should_quit());
        assert!(!controller.session().is_active());
    }

    #[test]
    fn test_update_is_idle_outside_a_round() {
        let mut controller = controller();
        assert_eq!(controller.update(100_000).unwrap(), TickOutcome::Idle);
    }
}
