//! Errors returned by operations that need the tree to have a root.
//!
//! Searching never fails: a missing value is reported as `None`.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a [`Tree`][crate::Tree] operation can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation that walks from the root was called on a tree
    /// that has never received an insert.
    #[error("`{operation}` requires a non-empty tree")]
    EmptyTree {
        /// Name of the refused operation.
        operation: &'static str,
    },
}
