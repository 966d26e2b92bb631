//! Finite sets of small integers
//!
//! `NumberSet` keeps its elements ordered so that equality is by value
//! and display is stable regardless of insertion order.

use std::collections::BTreeSet;
use std::fmt;

/// A finite set of distinct integers
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NumberSet(BTreeSet<u8>);

impl NumberSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: u8) -> bool {
        self.0.contains(&value)
    }

    /// Add an element, returning false if it was already present
    pub fn insert(&mut self, value: u8) -> bool {
        self.0.insert(value)
    }

    /// Iterate over the elements in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn is_subset(&self, other: &NumberSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_disjoint(&self, other: &NumberSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    pub(crate) fn inner(&self) -> &BTreeSet<u8> {
        &self.0
    }
}

impl FromIterator<u8> for NumberSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[u8; N]> for NumberSet {
    fn from(values: [u8; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[u8]> for NumberSet {
    fn from(values: &[u8]) -> Self {
        values.iter().copied().collect()
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}
