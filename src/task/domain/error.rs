//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing or modifying domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the character limit.
    #[error("task title exceeds {max} characters (got {actual})")]
    TitleTooLong {
        /// Maximum permitted character count.
        max: usize,
        /// Character count of the rejected title.
        actual: usize,
    },

    /// A title was explicitly cleared, which a task cannot hold.
    #[error("task title must not be null")]
    NullTitle,
}
