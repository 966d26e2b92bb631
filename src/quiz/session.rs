//! Game session state machine
//!
//! Tracks score, the per-question countdown and answer feedback. Time is
//! supplied by the caller as milliseconds from a monotonic clock, so the
//! session never reads the wall clock itself.

use super::generator::{Question, QuestionGenerator};
use crate::Result;
use log::{debug, info};
use rand::{rngs::SmallRng, Rng};

/// Timing and scoring rules for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    /// Countdown window per question
    pub question_seconds: u32,
    /// How long answer feedback stays up before the next question
    pub feedback_ms: u64,
    /// Points awarded for a correct answer
    pub points_per_correct: u32,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            question_seconds: 15,
            feedback_ms: 1000,
            points_per_correct: 10,
        }
    }
}

/// Observable phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No round running
    Inactive,
    /// A question is shown and accepts an answer
    AwaitingAnswer,
    /// An answer was given and its result is displayed
    Feedback,
}

/// What a call to `tick` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session inactive, nothing happened
    Idle,
    /// Countdown updated, same question
    Counting,
    /// Unanswered question ran out of time and was replaced
    TimedOut,
    /// Answered question was replaced after its feedback
    Advanced,
}

/// Result of a submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub index: usize,
    pub correct: bool,
    pub points_awarded: u32,
}

/// A running (or idle) quiz round
#[derive(Debug)]
pub struct GameSession<R = SmallRng> {
    generator: QuestionGenerator<R>,
    rules: RoundRules,
    active: bool,
    score: u32,
    current_question: Option<Question>,
    question_started_ms: u64,
    seconds_remaining: u32,
    selected_option: Option<usize>,
    is_correct: Option<bool>,
    feedback_started_ms: Option<u64>,
}

impl<R: Rng> GameSession<R> {
    /// Create an inactive session
    pub fn new(generator: QuestionGenerator<R>, rules: RoundRules) -> Self {
        Self {
            generator,
            rules,
            active: false,
            score: 0,
            current_question: None,
            question_started_ms: 0,
            seconds_remaining: rules.question_seconds,
            selected_option: None,
            is_correct: None,
            feedback_started_ms: None,
        }
    }

    /// Reset the score and show the first question
    pub fn start(&mut self, now_ms: u64) -> Result<()> {
        self.score = 0;
        self.active = true;
        info!("round started");
        self.next_question(now_ms)
    }

    /// End the round and discard the current question
    pub fn stop(&mut self) {
        if self.active {
            info!("round stopped with score {}", self.score);
        }
        self.active = false;
        self.current_question = None;
        self.clear_feedback();
        self.seconds_remaining = self.rules.question_seconds;
    }

    /// Advance timers to `now_ms`
    pub fn tick(&mut self, now_ms: u64) -> Result<TickOutcome> {
        if !self.active || self.current_question.is_none() {
            return Ok(TickOutcome::Idle);
        }

        let elapsed_secs = now_ms.saturating_sub(self.question_started_ms) / 1000;
        self.seconds_remaining =
            u64::from(self.rules.question_seconds).saturating_sub(elapsed_secs) as u32;

        if self.seconds_remaining == 0 {
            let outcome = if self.feedback_started_ms.is_some() {
                TickOutcome::Advanced
            } else {
                debug!("question timed out");
                TickOutcome::TimedOut
            };
            self.next_question(now_ms)?;
            return Ok(outcome);
        }

        if let Some(started) = self.feedback_started_ms {
            if now_ms.saturating_sub(started) > self.rules.feedback_ms {
                self.next_question(now_ms)?;
                return Ok(TickOutcome::Advanced);
            }
        }

        Ok(TickOutcome::Counting)
    }

    /// Answer the current question with the option at `index`
    ///
    /// Returns `None` without touching any state when no answer is
    /// expected right now or the index is out of range.
    pub fn submit_answer(&mut self, index: usize, now_ms: u64) -> Option<AnswerOutcome> {
        if self.phase() != SessionPhase::AwaitingAnswer {
            debug!("ignoring answer {} outside of an open question", index);
            return None;
        }
        let question = self.current_question.as_ref()?;
        if index >= question.options.len() {
            debug!("ignoring out of range answer {}", index);
            return None;
        }

        let correct = question.is_correct(index);
        let points_awarded = if correct {
            self.rules.points_per_correct
        } else {
            0
        };
        self.score += points_awarded;
        self.selected_option = Some(index);
        self.is_correct = Some(correct);
        self.feedback_started_ms = Some(now_ms);

        info!(
            "answer {} is {} (score {})",
            index,
            if correct { "correct" } else { "wrong" },
            self.score
        );

        Some(AnswerOutcome {
            index,
            correct,
            points_awarded,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.active, &self.current_question, self.feedback_started_ms) {
            (false, _, _) | (true, None, _) => SessionPhase::Inactive,
            (true, Some(_), None) => SessionPhase::AwaitingAnswer,
            (true, Some(_), Some(_)) => SessionPhase::Feedback,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    pub fn is_feedback_active(&self) -> bool {
        self.feedback_started_ms.is_some()
    }

    fn next_question(&mut self, now_ms: u64) -> Result<()> {
        let question = self.generator.generate_question()?;
        self.current_question = Some(question);
        self.question_started_ms = now_ms;
        self.seconds_remaining = self.rules.question_seconds;
        self.clear_feedback();
        Ok(())
    }

    fn clear_feedback(&mut self) {
        self.selected_option = None;
        self.is_correct = None;
        self.feedback_started_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(QuestionGenerator::with_seed(11), RoundRules::default())
    }

    fn wrong_index(session: &GameSession) -> usize {
        let correct = session.current_question().unwrap().correct_index().unwrap();
        (correct + 1) % 4
    }

    #[test]
    fn test_new_session_is_inactive() {
        let session = session();
        assert_eq!(session.phase(), SessionPhase::Inactive);
        assert_eq!(session.score(), 0);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_start_shows_question() {
        let mut session = session();
        session.start(500).unwrap();
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(session.seconds_remaining(), 15);
        assert!(session.current_question().is_some());
    }

    #[test]
    fn test_wrong_answer_scores_nothing() {
        let mut session = session();
        session.start(0).unwrap();
        let index = wrong_index(&session);
        let outcome = session.submit_answer(index, 100).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.points_awarded, 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.is_correct(), Some(false));
        assert_eq!(session.selected_option(), Some(index));
        assert_eq!(session.phase(), SessionPhase::Feedback);
    }

    #[test]
    fn test_answer_ignored_during_feedback() {
        let mut session = session();
        session.start(0).unwrap();
        let correct = session.current_question().unwrap().correct_index().unwrap();
        assert!(session.submit_answer(correct, 100).is_some());
        assert!(session.submit_answer(correct, 200).is_none());
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_answer_ignored_without_question() {
        let mut session = session();
        assert!(session.submit_answer(0, 0).is_none());
        session.start(0).unwrap();
        assert!(session.submit_answer(4, 0).is_none());
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
    }

    #[test]
    fn test_countdown_uses_whole_seconds() {
        let mut session = session();
        session.start(1_000).unwrap();
        assert_eq!(session.tick(1_999).unwrap(), TickOutcome::Counting);
        assert_eq!(session.seconds_remaining(), 15);
        session.tick(4_200).unwrap();
        assert_eq!(session.seconds_remaining(), 12);
    }

    #[test]
    fn test_feedback_lasts_more_than_one_second() {
        let mut session = session();
        session.start(0).unwrap();
        let index = wrong_index(&session);
        session.submit_answer(index, 2_000).unwrap();
        assert_eq!(session.tick(3_000).unwrap(), TickOutcome::Counting);
        assert!(session.is_feedback_active());
        assert_eq!(session.tick(3_001).unwrap(), TickOutcome::Advanced);
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(session.selected_option(), None);
        assert_eq!(session.seconds_remaining(), 15);
    }

    #[test]
    fn test_timeout_during_feedback_counts_as_advance() {
        let mut session = session();
        session.start(0).unwrap();
        let index = wrong_index(&session);
        session.submit_answer(index, 14_800).unwrap();
        assert_eq!(session.tick(15_000).unwrap(), TickOutcome::Advanced);
        assert!(!session.is_feedback_active());
    }

    #[test]
    fn test_stop_discards_question() {
        let mut session = session();
        session.start(0).unwrap();
        session.stop();
        assert_eq!(session.phase(), SessionPhase::Inactive);
        assert!(session.current_question().is_none());
        assert_eq!(session.tick(60_000).unwrap(), TickOutcome::Idle);
    }

    #[test]
    fn test_restart_resets_score() {
        let mut session = session();
        session.start(0).unwrap();
        let correct = session.current_question().unwrap().correct_index().unwrap();
        session.submit_answer(correct, 10).unwrap();
        assert_eq!(session.score(), 10);
        session.stop();
        session.start(20).unwrap();
        assert_eq!(session.score(), 0);
    }
}
