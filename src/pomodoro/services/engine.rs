//! Clock-driven owner of the single pomodoro timer state.

use crate::pomodoro::domain::{
    Phase, PomodoroDomainError, PomodoroSettings, PomodoroSnapshot, PomodoroState,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Pomodoro timer engine.
///
/// Holds one [`PomodoroState`] behind a mutex. Each operation reads the clock
/// once and uses that instant for every comparison it makes.
pub struct PomodoroService<C>
where
    C: Clock + Send + Sync,
{
    state: Mutex<PomodoroState>,
    clock: Arc<C>,
}

impl<C> PomodoroService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an engine with default settings, stopped in the work phase.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_state(PomodoroState::default(), clock)
    }

    /// Creates an engine starting from `state`.
    #[must_use]
    pub const fn with_state(state: PomodoroState, clock: Arc<C>) -> Self {
        Self {
            state: Mutex::new(state),
            clock,
        }
    }

    /// Returns the current state with the remaining time computed now.
    #[must_use]
    pub fn get_state(&self) -> PomodoroSnapshot {
        let now = self.clock.utc();
        self.lock().snapshot_at(now)
    }

    /// Starts a new interval.
    ///
    /// With no phase, or an empty phase name, the current phase is restarted.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroDomainError::InvalidPhase`] when `requested` names
    /// no known phase. The state is left unchanged in that case.
    #[tracing::instrument(skip(self))]
    pub fn start(&self, requested: Option<&str>) -> Result<PomodoroSnapshot, PomodoroDomainError> {
        let requested_phase = requested
            .filter(|name| !name.is_empty())
            .map(Phase::try_from)
            .transpose()?;
        let now = self.clock.utc();
        let mut state = self.lock();
        let phase = requested_phase.unwrap_or_else(|| state.phase());
        *state = state.started(phase, now);
        tracing::info!(
            phase = %phase,
            completed_cycles = state.completed_cycles(),
            "pomodoro interval started"
        );
        Ok(state.snapshot_at(now))
    }

    /// Stops the timer. Stopping a stopped timer changes nothing.
    #[must_use]
    #[tracing::instrument(skip(self))]
    pub fn stop(&self) -> PomodoroSnapshot {
        let now = self.clock.utc();
        let mut state = self.lock();
        if state.status().is_running() {
            tracing::info!(phase = %state.phase(), "pomodoro interval stopped");
        }
        *state = state.stopped();
        state.snapshot_at(now)
    }

    /// Replaces the phase durations, resizing a running interval in place.
    #[must_use]
    #[tracing::instrument(skip(self))]
    pub fn update_settings(&self, settings: PomodoroSettings) -> PomodoroSnapshot {
        let now = self.clock.utc();
        let mut state = self.lock();
        *state = state.with_settings(settings);
        if let Some(interval) = state.status().interval() {
            log_resize(state.phase(), interval.ends_at(), now);
        }
        state.snapshot_at(now)
    }

    fn lock(&self) -> MutexGuard<'_, PomodoroState> {
        // Every transition assigns a complete state, so a poisoned guard
        // still holds a consistent value.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_resize(phase: Phase, ends_at: DateTime<Utc>, now: DateTime<Utc>) {
    if ends_at <= now {
        tracing::warn!(%phase, %ends_at, "resized interval has already elapsed");
    } else {
        tracing::info!(%phase, %ends_at, "running interval resized");
    }
}
