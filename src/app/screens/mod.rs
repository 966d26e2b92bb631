//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

pub mod game;
pub mod menu;
pub mod tutorial;

pub use game::GameScreen;
pub use menu::{MenuItem, MenuScreen};
pub use tutorial::TutorialScreen;
