//! Timer phases.

use super::PomodoroDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of interval the timer is counting down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Focused work interval.
    #[default]
    Work,
    /// Short rest between work intervals.
    ShortBreak,
    /// Long rest after several work intervals.
    LongBreak,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Self; 3] = [Self::Work, Self::ShortBreak, Self::LongBreak];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "short_break",
            Self::LongBreak => "long_break",
        }
    }

    /// Returns whether starting this phase counts as a new cycle.
    #[must_use]
    pub const fn counts_as_cycle(self) -> bool {
        matches!(self, Self::Work)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Phase {
    type Error = PomodoroDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "work" => Ok(Self::Work),
            "short_break" => Ok(Self::ShortBreak),
            "long_break" => Ok(Self::LongBreak),
            _ => Err(PomodoroDomainError::InvalidPhase(value.to_owned())),
        }
    }
}
