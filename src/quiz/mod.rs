//! Quiz core
//!
//! Question generation and the timed scoring session that consumes it.

pub mod generator;
pub mod session;

pub use generator::{Question, QuestionGenerator, OPTION_COUNT};
pub use session::{AnswerOutcome, GameSession, RoundRules, SessionPhase, TickOutcome};
