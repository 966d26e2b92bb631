//! Main application controller
//!
//! Runs the fixed-rate frame loop: drain input, tick the session from a
//! monotonic clock, draw.

use crate::{
    app::{controller::ScreenController, tui::Tui},
    config::GameConfig,
    quiz::GameSession,
    Result, SetZeroError,
};
use log::info;
use std::time::{Duration, Instant};
use tokio::time::{interval, MissedTickBehavior};

/// TUI application
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Screens and game state
    controller: ScreenController,
    /// Time between frames
    frame_interval: Duration,
    /// Monotonic reference for session timing
    clock: Instant,
}

impl App {
    /// Create a new application instance from a validated configuration
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let session = GameSession::new(config.question_generator(), config.round_rules());
        Ok(Self {
            tui: Tui::new().map_err(|e| SetZeroError::TuiError(e.to_string()))?,
            controller: ScreenController::new(session),
            frame_interval: Duration::from_secs(1) / config.frame_rate,
            clock: Instant::now(),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| SetZeroError::TuiError(e.to_string()))
    }

    /// Run the main application loop until the player quits
    pub async fn run(&mut self) -> Result<()> {
        info!("frame loop started at {:?} per frame", self.frame_interval);
        let mut frames = interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.controller.should_quit() {
            frames.tick().await;

            for event in self.tui.poll_events()? {
                let now = self.now_ms();
                self.controller.handle_event(&event, now)?;
                if self.controller.should_quit() {
                    break;
                }
            }

            let now = self.now_ms();
            self.controller.update(now)?;
            self.tui.draw(|f| self.controller.render(f))?;
        }

        self.tui.restore()?;
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.clock.elapsed().as_millis() as u64
    }
}
