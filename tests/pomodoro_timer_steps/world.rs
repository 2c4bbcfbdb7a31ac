//! Shared world state for pomodoro timer BDD scenarios.

use std::sync::Arc;

use focus_widget::pomodoro::{
    domain::{PomodoroDomainError, PomodoroSnapshot},
    services::PomodoroService,
};
use rstest::fixture;

use crate::test_helpers::clock::ManualClock;

/// Scenario world for pomodoro behaviour tests.
pub struct PomodoroWorld {
    pub clock: Arc<ManualClock>,
    pub engine: PomodoroService<ManualClock>,
    pub last_start_error: Option<PomodoroDomainError>,
}

impl PomodoroWorld {
    /// Creates a world around a stopped timer and a frozen clock.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::new());
        Self {
            engine: PomodoroService::new(Arc::clone(&clock)),
            clock,
            last_start_error: None,
        }
    }

    /// Returns the timer state at the current clock reading.
    pub fn snapshot(&self) -> PomodoroSnapshot {
        self.engine.get_state()
    }
}

impl Default for PomodoroWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PomodoroWorld {
    PomodoroWorld::default()
}
