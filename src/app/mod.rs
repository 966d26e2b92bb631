//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

pub mod app;
pub mod controller;
pub mod screens;
pub mod state;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use controller::ScreenController;
pub use screens::{GameScreen, MenuItem, MenuScreen, TutorialScreen};
pub use state::{AppState, NavigationAction, ScreenSignal, StateManager};
pub use tui::Tui;
