//! Error types for the launcher.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while launching or supervising the server.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The frontend has not been built.
    #[error("missing frontend build at {0}; build the frontend before launching the widget")]
    MissingFrontend(PathBuf),

    /// The server process could not be started.
    #[error("failed to start server process {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The readiness probe HTTP client could not be built.
    #[error("failed to build readiness client: {0}")]
    Client(#[from] reqwest::Error),

    /// The server did not answer successfully before the deadline.
    #[error("server at {url} did not become ready within {waited:?}")]
    NotReady {
        /// Probed URL.
        url: String,
        /// Time spent waiting.
        waited: Duration,
    },

    /// Waiting on or signalling the server process failed.
    #[error("failed to supervise server process: {0}")]
    Supervise(#[source] std::io::Error),
}
