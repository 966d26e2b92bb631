//! Question generation
//!
//! Draws two random operand sets, picks an operation, computes the answer
//! and surrounds it with distinct distractors in a shuffled option list.

use crate::sets::{NumberSet, Operation};
use crate::{Result, SetZeroError};
use log::{debug, trace};
use rand::{rngs::SmallRng, seq::index, seq::SliceRandom, Rng, SeedableRng};

/// Smallest value a generated set may contain
pub const UNIVERSE_MIN: u8 = 1;
/// Number of values in the universe `1..=10`
pub const UNIVERSE_SIZE: usize = 10;
pub const OPERAND_MIN_SIZE: usize = 3;
pub const OPERAND_MAX_SIZE: usize = 6;
pub const DISTRACTOR_MIN_SIZE: usize = 2;
pub const DISTRACTOR_MAX_SIZE: usize = 7;
/// Options shown per question, the correct answer included
pub const OPTION_COUNT: usize = 4;
/// Default cap on draws spent building one question
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;
/// Smallest cap a configuration may ask for; lower caps fail on ordinary
/// operand redraws and distractor collisions
pub const MIN_MAX_ATTEMPTS: usize = 100;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub set_a: NumberSet,
    pub set_b: NumberSet,
    pub operation: Operation,
    pub correct_answer: NumberSet,
    /// Exactly `OPTION_COUNT` distinct non-empty sets, one of them the answer
    pub options: Vec<NumberSet>,
}

impl Question {
    /// Text asked to the player, e.g. `What is A ∪ B?`
    pub fn prompt(&self) -> String {
        format!("What is A {} B?", self.operation.symbol())
    }

    /// Position of the correct answer among the options
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o == &self.correct_answer)
    }

    /// Check whether the option at `index` equals the correct answer
    pub fn is_correct(&self, index: usize) -> bool {
        self.options
            .get(index)
            .is_some_and(|option| option == &self.correct_answer)
    }
}

/// Random question source
///
/// Every draw made while building one question counts against
/// `max_attempts`, including operand redraws for empty answers.
#[derive(Debug, Clone)]
pub struct QuestionGenerator<R = SmallRng> {
    rng: R,
    max_attempts: usize,
}

impl QuestionGenerator<SmallRng> {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Create a deterministic generator
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for QuestionGenerator<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuestionGenerator<R> {
    /// Create a generator around an existing random source
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set the attempt cap for a single question
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Draw a set of `min_size..=max_size` distinct values from `1..=10`
    pub fn generate_set(&mut self, min_size: usize, max_size: usize) -> Result<NumberSet> {
        if min_size > max_size || max_size > UNIVERSE_SIZE {
            return Err(SetZeroError::InvalidSetBounds {
                min: min_size,
                max: max_size,
                universe: UNIVERSE_SIZE,
            });
        }

        let size = self.rng.gen_range(min_size..=max_size);
        Ok(index::sample(&mut self.rng, UNIVERSE_SIZE, size)
            .into_vec()
            .into_iter()
            .map(|i| UNIVERSE_MIN + i as u8)
            .collect())
    }

    /// Build a complete question with shuffled options
    pub fn generate_question(&mut self) -> Result<Question> {
        let mut attempts = 0;
        // Fixed across operand redraws so each operation keeps an equal share
        let operation = Operation::ALL[self.rng.gen_range(0..Operation::ALL.len())];

        let (set_a, set_b, correct_answer) = loop {
            self.spend_attempt(&mut attempts)?;
            let set_a = self.generate_set(OPERAND_MIN_SIZE, OPERAND_MAX_SIZE)?;
            let set_b = self.generate_set(OPERAND_MIN_SIZE, OPERAND_MAX_SIZE)?;
            let answer = operation.apply(&set_a, &set_b);
            if !answer.is_empty() {
                break (set_a, set_b, answer);
            }
            trace!("{} {} {} is empty, redrawing operands", set_a, operation, set_b);
        };

        let mut options = Vec::with_capacity(OPTION_COUNT);
        options.push(correct_answer.clone());
        while options.len() < OPTION_COUNT {
            self.spend_attempt(&mut attempts)?;
            let candidate = self.generate_set(DISTRACTOR_MIN_SIZE, DISTRACTOR_MAX_SIZE)?;
            if !candidate.is_empty() && !options.contains(&candidate) {
                options.push(candidate);
            }
        }
        options.shuffle(&mut self.rng);

        debug!(
            "generated {} {} {} = {} after {} draws",
            set_a, operation, set_b, correct_answer, attempts
        );

        Ok(Question {
            set_a,
            set_b,
            operation,
            correct_answer,
            options,
        })
    }

    fn spend_attempt(&self, attempts: &mut usize) -> Result<()> {
        *attempts += 1;
        if *attempts > self.max_attempts {
            return Err(SetZeroError::GenerationError(format!(
                "no valid question after {} attempts",
                self.max_attempts
            )));
        }
        Ok(())
    }
}
