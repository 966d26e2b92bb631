//! Set operations
//!
//! Pure functions over two `NumberSet`s and the `Operation` tag that
//! maps each quiz operation to one of them.

use super::NumberSet;
use std::fmt;

/// Signature shared by every binary set operation
pub type SetFn = fn(&NumberSet, &NumberSet) -> NumberSet;

/// Elements in `a` or `b`
pub fn union(a: &NumberSet, b: &NumberSet) -> NumberSet {
    a.inner().union(b.inner()).copied().collect()
}

/// Elements in both `a` and `b`
pub fn intersection(a: &NumberSet, b: &NumberSet) -> NumberSet {
    a.inner().intersection(b.inner()).copied().collect()
}

/// Elements in `a` that are not in `b`
pub fn difference(a: &NumberSet, b: &NumberSet) -> NumberSet {
    a.inner().difference(b.inner()).copied().collect()
}

/// Elements in exactly one of `a` and `b`
pub fn symmetric_difference(a: &NumberSet, b: &NumberSet) -> NumberSet {
    a.inner().symmetric_difference(b.inner()).copied().collect()
}

/// Elements of `universe` missing from `a`
pub fn complement(a: &NumberSet, universe: &NumberSet) -> NumberSet {
    difference(universe, a)
}

/// Binary operations asked about in the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

impl Operation {
    /// Every operation, in tutorial order
    pub const ALL: [Operation; 4] = [
        Operation::Union,
        Operation::Intersection,
        Operation::Difference,
        Operation::SymmetricDifference,
    ];

    /// Symbol shown between the operands
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Union => "∪",
            Operation::Intersection => "∩",
            Operation::Difference => "-",
            Operation::SymmetricDifference => "Δ",
        }
    }

    /// Get a human-readable name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Union => "Union",
            Operation::Intersection => "Intersection",
            Operation::Difference => "Difference",
            Operation::SymmetricDifference => "Symmetric Difference",
        }
    }

    /// The function computing this operation
    pub fn function(&self) -> SetFn {
        match self {
            Operation::Union => union,
            Operation::Intersection => intersection,
            Operation::Difference => difference,
            Operation::SymmetricDifference => symmetric_difference,
        }
    }

    pub fn apply(&self, a: &NumberSet, b: &NumberSet) -> NumberSet {
        (self.function())(a, b)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u8]) -> NumberSet {
        NumberSet::from(values)
    }

    #[test]
    fn test_union_scenario() {
        let result = Operation::Union.apply(&set(&[1, 2, 3]), &set(&[3, 4, 5]));
        assert_eq!(result, set(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_intersection_scenario() {
        let result = Operation::Intersection.apply(&set(&[1, 2, 3]), &set(&[3, 4, 5]));
        assert_eq!(result, set(&[3]));
    }

    #[test]
    fn test_difference_scenario() {
        let result = Operation::Difference.apply(&set(&[1, 2, 3, 4]), &set(&[3, 4, 5]));
        assert_eq!(result, set(&[1, 2]));
    }

    #[test]
    fn test_difference_is_not_symmetric() {
        let a = set(&[1, 2, 3, 4]);
        let b = set(&[3, 4, 5]);
        assert_ne!(difference(&a, &b), difference(&b, &a));
        assert_eq!(difference(&b, &a), set(&[5]));
    }

    #[test]
    fn test_symmetric_difference_scenario() {
        let result = symmetric_difference(&set(&[1, 2, 3]), &set(&[3, 4, 5]));
        assert_eq!(result, set(&[1, 2, 4, 5]));
    }

    #[test]
    fn test_complement() {
        let universe = set(&[1, 2, 3, 4, 5]);
        assert_eq!(complement(&set(&[1, 2]), &universe), set(&[3, 4, 5]));
    }

    #[test]
    fn test_operations_with_empty_sets() {
        let empty = NumberSet::new();
        let a = set(&[1, 2]);
        assert_eq!(union(&a, &empty), a);
        assert!(intersection(&a, &empty).is_empty());
        assert_eq!(difference(&a, &empty), a);
        assert!(difference(&empty, &a).is_empty());
        assert_eq!(symmetric_difference(&empty, &a), a);
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: std::collections::HashSet<_> =
            Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols.len(), Operation::ALL.len());
        assert_eq!(Operation::SymmetricDifference.to_string(), "Δ");
    }
}
