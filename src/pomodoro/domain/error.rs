//! Error types for pomodoro validation.

use thiserror::Error;

/// Errors returned while validating pomodoro input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PomodoroDomainError {
    /// The requested phase name is not one of `work`, `short_break`, or
    /// `long_break`.
    #[error("unknown phase '{0}'")]
    InvalidPhase(String),

    /// A duration setting lies outside its permitted range.
    #[error("{setting} must be between {min} and {max} minutes (got {value})")]
    SettingOutOfRange {
        /// Name of the offending setting.
        setting: &'static str,
        /// Rejected value.
        value: i64,
        /// Smallest permitted value.
        min: i64,
        /// Largest permitted value.
        max: i64,
    },
}
