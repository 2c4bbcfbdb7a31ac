//! User-configurable phase durations.

use super::{Phase, PomodoroDomainError};
use chrono::TimeDelta;
use serde::Serialize;

/// Durations, in whole minutes, of each timer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PomodoroSettings {
    work_minutes: u32,
    short_break_minutes: u32,
    long_break_minutes: u32,
}

impl PomodoroSettings {
    /// Default work duration in minutes.
    pub const DEFAULT_WORK_MINUTES: u32 = 25;
    /// Default short break duration in minutes.
    pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
    /// Default long break duration in minutes.
    pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;

    const MIN_MINUTES: i64 = 1;
    const MAX_WORK_MINUTES: i64 = 120;
    const MAX_BREAK_MINUTES: i64 = 60;

    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroDomainError::SettingOutOfRange`] when work lies
    /// outside `1..=120` or either break lies outside `1..=60`.
    pub fn new(
        work_minutes: i64,
        short_break_minutes: i64,
        long_break_minutes: i64,
    ) -> Result<Self, PomodoroDomainError> {
        Ok(Self {
            work_minutes: bounded("work_minutes", work_minutes, Self::MAX_WORK_MINUTES)?,
            short_break_minutes: bounded(
                "short_break_minutes",
                short_break_minutes,
                Self::MAX_BREAK_MINUTES,
            )?,
            long_break_minutes: bounded(
                "long_break_minutes",
                long_break_minutes,
                Self::MAX_BREAK_MINUTES,
            )?,
        })
    }

    /// Returns the work duration in minutes.
    #[must_use]
    pub const fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    /// Returns the short break duration in minutes.
    #[must_use]
    pub const fn short_break_minutes(&self) -> u32 {
        self.short_break_minutes
    }

    /// Returns the long break duration in minutes.
    #[must_use]
    pub const fn long_break_minutes(&self) -> u32 {
        self.long_break_minutes
    }

    /// Returns the configured minutes for `phase`.
    #[must_use]
    pub const fn minutes_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        }
    }

    /// Returns the interval length for `phase`.
    #[must_use]
    pub fn duration_for(&self, phase: Phase) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.minutes_for(phase)))
    }
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_minutes: Self::DEFAULT_WORK_MINUTES,
            short_break_minutes: Self::DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: Self::DEFAULT_LONG_BREAK_MINUTES,
        }
    }
}

fn bounded(setting: &'static str, value: i64, max: i64) -> Result<u32, PomodoroDomainError> {
    let out_of_range = || PomodoroDomainError::SettingOutOfRange {
        setting,
        value,
        min: PomodoroSettings::MIN_MINUTES,
        max,
    };
    if !(PomodoroSettings::MIN_MINUTES..=max).contains(&value) {
        return Err(out_of_range());
    }
    u32::try_from(value).map_err(|_| out_of_range())
}
