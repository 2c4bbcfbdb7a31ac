//! Domain model for the pomodoro timer.

mod error;
mod phase;
mod settings;
mod state;

pub use error::PomodoroDomainError;
pub use phase::Phase;
pub use settings::PomodoroSettings;
pub use state::{Interval, PomodoroSnapshot, PomodoroState, TimerStatus};
