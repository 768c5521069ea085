//! Validation errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Construction-time validation failures reported by the strict `try_*` constructors.
///
/// Runtime misuse (disabled activation, undeclared keys, stale focus) is corrected silently
/// and never surfaces as an error.
pub enum ComboboxError {
    /// Two declared items share the same key.
    #[error("duplicate item key `{0}`")]
    DuplicateItemKey(String),
    /// A single-select widget was seeded with more than one key.
    #[error("single-select value holds {count} keys; at most one is allowed")]
    TooManySingleValues {
        /// Number of keys supplied.
        count: usize,
    },
}
