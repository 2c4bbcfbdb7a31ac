//! Child-process supervision for the server.

use super::LauncherError;
use std::path::Path;
use std::process::ExitStatus;
use std::time::Duration;
use tokio::process::{Child, Command};

/// Running server child process.
///
/// The child is killed if this value is dropped without [`Self::shutdown`].
#[derive(Debug)]
pub struct BackendProcess {
    child: Child,
}

impl BackendProcess {
    /// Time a terminated child is given to exit before it is killed.
    pub const DEFAULT_GRACE: Duration = Duration::from_secs(5);

    /// Starts `program` bound to `host` and `port`, serving `frontend_dist`.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::Spawn`] when the process cannot be started.
    pub fn spawn(
        program: &Path,
        host: &str,
        port: u16,
        frontend_dist: &Path,
    ) -> Result<Self, LauncherError> {
        let mut command = Command::new(program);
        command
            .env("FOCUS_WIDGET_HOST", host)
            .env("FOCUS_WIDGET_PORT", port.to_string())
            .env("FOCUS_WIDGET_FRONTEND_DIST", frontend_dist);
        Self::from_command(command).map_err(|source| LauncherError::Spawn {
            program: program.to_path_buf(),
            source,
        })
    }

    /// Starts an arbitrary prepared command.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised by the spawn.
    pub fn from_command(mut command: Command) -> std::io::Result<Self> {
        let child = command.kill_on_drop(true).spawn()?;
        tracing::info!(pid = ?child.id(), "server process started");
        Ok(Self { child })
    }

    /// Returns the OS process id while the child is running.
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Waits for the child to exit on its own.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::Supervise`] when waiting fails.
    pub async fn wait(&mut self) -> Result<ExitStatus, LauncherError> {
        self.child.wait().await.map_err(LauncherError::Supervise)
    }

    /// Asks the child to terminate, waits up to `grace`, then kills it.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::Supervise`] when signalling or waiting fails.
    pub async fn shutdown(mut self, grace: Duration) -> Result<ExitStatus, LauncherError> {
        if let Some(status) = self.child.try_wait().map_err(LauncherError::Supervise)? {
            return Ok(status);
        }

        self.terminate()?;
        if let Ok(waited) = tokio::time::timeout(grace, self.child.wait()).await {
            return waited.map_err(LauncherError::Supervise);
        }

        tracing::warn!(?grace, "server ignored termination, killing it");
        self.child.kill().await.map_err(LauncherError::Supervise)?;
        self.child.wait().await.map_err(LauncherError::Supervise)
    }

    #[cfg(unix)]
    fn terminate(&mut self) -> Result<(), LauncherError> {
        use nix::sys::signal::{Signal, kill};
        use nix::unistd::Pid;

        let Some(raw_pid) = self.child.id() else {
            return Ok(());
        };
        let pid = i32::try_from(raw_pid)
            .map_err(|err| LauncherError::Supervise(std::io::Error::other(err)))?;
        kill(Pid::from_raw(pid), Signal::SIGTERM)
            .map_err(|errno| LauncherError::Supervise(std::io::Error::from(errno)))
    }

    #[cfg(not(unix))]
    fn terminate(&mut self) -> Result<(), LauncherError> {
        self.child.start_kill().map_err(LauncherError::Supervise)
    }
}
