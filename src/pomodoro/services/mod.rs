//! Application services for the pomodoro timer.

mod engine;

pub use engine::PomodoroService;
