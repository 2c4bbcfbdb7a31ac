//! Launcher support for the desktop shell.
//!
//! The shell starts the server as a child process, waits until
//! `GET /pomodoro` answers with a success status, points the user at the
//! frontend, and terminates the child when it exits.

mod error;
mod readiness;
mod supervisor;

pub use error::LauncherError;
pub use readiness::ReadinessProbe;
pub use supervisor::BackendProcess;
