//! Set model module
//!
//! Contains the `NumberSet` value type and the pure set operations
//! the quiz is built on.

pub mod number_set;
pub mod ops;

// Re-export commonly used types
pub use number_set::NumberSet;
pub use ops::{
    complement, difference, intersection, symmetric_difference, union, Operation, SetFn,
};
