//! Property checks for set operations and question generation, run over
//! many seeded draws

use rand::{rngs::SmallRng, Rng, SeedableRng};
use setzero::config::GameConfig;
use setzero::quiz::generator::{
    QuestionGenerator, DISTRACTOR_MAX_SIZE, DISTRACTOR_MIN_SIZE, MIN_MAX_ATTEMPTS, OPTION_COUNT,
};
use setzero::sets::{
    difference, intersection, symmetric_difference, union, NumberSet, Operation,
};
use std::collections::{HashMap, HashSet};

fn random_set(rng: &mut SmallRng) -> NumberSet {
    let len = rng.gen_range(0..=12);
    (0..len).map(|_| rng.gen_range(0..=20)).collect()
}

#[test]
fn test_set_identities_hold() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..500 {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);

        assert!(intersection(&a, &b).is_subset(&union(&a, &b)));
        assert!(difference(&a, &b).is_disjoint(&b));
        assert!(intersection(&difference(&a, &b), &b).is_empty());
        assert_eq!(
            symmetric_difference(&a, &b),
            union(&difference(&a, &b), &difference(&b, &a))
        );
        assert_eq!(union(&a, &b), union(&b, &a));
    }
}

#[test]
fn test_operations_are_idempotent() {
    let mut rng = SmallRng::seed_from_u64(77);
    for _ in 0..100 {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);
        for operation in Operation::ALL {
            assert_eq!(operation.apply(&a, &b), operation.apply(&a, &b));
        }
    }
}

#[test]
fn test_generated_sets_stay_in_universe() {
    let mut generator = QuestionGenerator::with_seed(3);
    for _ in 0..300 {
        let set = generator
            .generate_set(DISTRACTOR_MIN_SIZE, DISTRACTOR_MAX_SIZE)
            .unwrap();
        assert!((DISTRACTOR_MIN_SIZE..=DISTRACTOR_MAX_SIZE).contains(&set.len()));
        assert!(set.iter().all(|v| (1..=10).contains(&v)));
    }
}

#[test]
fn test_generated_questions_are_well_formed() {
    let mut generator = QuestionGenerator::with_seed(123);
    let mut operations_seen = HashSet::new();
    let mut positions_seen = HashSet::new();

    for _ in 0..500 {
        let question = generator.generate_question().unwrap();

        assert!((3..=6).contains(&question.set_a.len()));
        assert!((3..=6).contains(&question.set_b.len()));
        assert_eq!(
            question.correct_answer,
            question.operation.apply(&question.set_a, &question.set_b)
        );

        assert_eq!(question.options.len(), OPTION_COUNT);
        assert!(question.options.iter().all(|o| !o.is_empty()));
        let distinct: HashSet<_> = question.options.iter().collect();
        assert_eq!(distinct.len(), OPTION_COUNT);
        let matches = question
            .options
            .iter()
            .filter(|o| **o == question.correct_answer)
            .count();
        assert_eq!(matches, 1);

        operations_seen.insert(question.operation);
        positions_seen.insert(question.correct_index().unwrap());
    }

    assert_eq!(operations_seen.len(), Operation::ALL.len());
    assert_eq!(positions_seen.len(), OPTION_COUNT);
}

#[test]
fn test_operations_are_drawn_uniformly() {
    const DRAWS: usize = 40_000;
    let mut generator = QuestionGenerator::with_seed(12345);
    let mut counts: HashMap<Operation, usize> = HashMap::new();
    for _ in 0..DRAWS {
        let question = generator.generate_question().unwrap();
        *counts.entry(question.operation).or_default() += 1;
    }

    for operation in Operation::ALL {
        let share = counts.get(&operation).copied().unwrap_or(0) as f64 / DRAWS as f64;
        assert!(
            (share - 0.25).abs() < 0.02,
            "{} drawn {:.4} of the time",
            operation.name(),
            share
        );
    }
}

#[test]
fn test_smallest_accepted_cap_always_generates() {
    for seed in 0..50 {
        let mut config = GameConfig::new().with_seed(seed);
        config.max_generation_attempts = MIN_MAX_ATTEMPTS;
        config.validate().unwrap();

        let mut generator = config.question_generator();
        for _ in 0..200 {
            assert!(generator.generate_question().is_ok());
        }
    }
}

#[test]
fn test_generator_accepts_any_rng() {
    let mut generator = QuestionGenerator::from_rng(rand::rngs::mock::StepRng::new(0, 1));
    let set = generator.generate_set(4, 4).unwrap();
    assert_eq!(set.len(), 4);
}
