//! Timer state and its pure transitions.

use super::{Phase, PomodoroSettings};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// Absolute bounds of a running interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    started_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
}

impl Interval {
    /// Creates an interval of `duration` beginning at `started_at`.
    #[must_use]
    pub fn starting_at(started_at: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self {
            started_at,
            ends_at: started_at + duration,
        }
    }

    /// Returns when the interval began.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the interval is due to end.
    #[must_use]
    pub const fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    /// Returns the time left at `now`, never negative.
    #[must_use]
    pub fn remaining_at(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.ends_at - now).max(TimeDelta::zero())
    }

    /// Returns the same interval resized to `duration`, keeping its start.
    #[must_use]
    pub fn resized(self, duration: TimeDelta) -> Self {
        Self::starting_at(self.started_at, duration)
    }
}

/// Whether the timer is counting down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimerStatus {
    /// No interval in progress.
    #[default]
    Stopped,
    /// An interval is in progress.
    Running(Interval),
}

impl TimerStatus {
    /// Returns the running interval, if any.
    #[must_use]
    pub const fn interval(&self) -> Option<&Interval> {
        match self {
            Self::Stopped => None,
            Self::Running(interval) => Some(interval),
        }
    }

    /// Returns whether an interval is in progress.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
}

/// Complete pomodoro timer state.
///
/// Every transition consumes the current value and returns its successor, so
/// the owner replaces the whole state in one assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PomodoroState {
    phase: Phase,
    settings: PomodoroSettings,
    status: TimerStatus,
    completed_cycles: u32,
}

impl PomodoroState {
    /// Returns the current phase. Preserved while stopped.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the active duration settings.
    #[must_use]
    pub const fn settings(&self) -> &PomodoroSettings {
        &self.settings
    }

    /// Returns the running/stopped status.
    #[must_use]
    pub const fn status(&self) -> &TimerStatus {
        &self.status
    }

    /// Returns how many work phases have been started.
    #[must_use]
    pub const fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Starts a fresh interval of `phase` at `now`.
    ///
    /// Any interval already in progress is discarded. Starting a work phase
    /// counts a new cycle.
    #[must_use]
    pub fn started(self, phase: Phase, now: DateTime<Utc>) -> Self {
        let completed_cycles = if phase.counts_as_cycle() {
            self.completed_cycles.saturating_add(1)
        } else {
            self.completed_cycles
        };
        Self {
            phase,
            status: TimerStatus::Running(Interval::starting_at(
                now,
                self.settings.duration_for(phase),
            )),
            completed_cycles,
            ..self
        }
    }

    /// Stops the timer, keeping the phase and cycle count.
    #[must_use]
    pub const fn stopped(self) -> Self {
        Self {
            status: TimerStatus::Stopped,
            ..self
        }
    }

    /// Replaces the settings.
    ///
    /// A running interval keeps its start and is resized to the new duration
    /// of the current phase; the end may already lie in the past.
    #[must_use]
    pub fn with_settings(self, settings: PomodoroSettings) -> Self {
        let status = match self.status {
            TimerStatus::Stopped => TimerStatus::Stopped,
            TimerStatus::Running(interval) => {
                TimerStatus::Running(interval.resized(settings.duration_for(self.phase)))
            }
        };
        Self {
            settings,
            status,
            ..self
        }
    }

    /// Projects the state as observed at `now`.
    #[must_use]
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> PomodoroSnapshot {
        let interval = self.status.interval();
        PomodoroSnapshot {
            is_running: self.status.is_running(),
            current_phase: self.phase,
            settings: self.settings,
            started_at: interval.map(Interval::started_at),
            ends_at: interval.map(Interval::ends_at),
            completed_cycles: self.completed_cycles,
            remaining_seconds: interval
                .and_then(|running| running.remaining_at(now).to_std().ok())
                .map(|remaining| remaining.as_secs_f64()),
        }
    }
}

/// Read model of the timer at a single instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PomodoroSnapshot {
    is_running: bool,
    current_phase: Phase,
    settings: PomodoroSettings,
    started_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
    completed_cycles: u32,
    remaining_seconds: Option<f64>,
}

impl PomodoroSnapshot {
    /// Returns whether an interval is in progress.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn current_phase(&self) -> Phase {
        self.current_phase
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &PomodoroSettings {
        &self.settings
    }

    /// Returns when the running interval began.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns when the running interval is due to end.
    #[must_use]
    pub const fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.ends_at
    }

    /// Returns how many work phases have been started.
    #[must_use]
    pub const fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Returns the seconds left in the running interval, clamped at zero.
    #[must_use]
    pub const fn remaining_seconds(&self) -> Option<f64> {
        self.remaining_seconds
    }
}
