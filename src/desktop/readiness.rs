//! Polling readiness check for the server.

use super::LauncherError;
use std::time::Duration;
use tokio::time::Instant;

/// Polls a URL until it answers with a success status or a deadline passes.
#[derive(Debug, Clone)]
pub struct ReadinessProbe {
    url: String,
    request_timeout: Duration,
    backoff: Duration,
    deadline: Duration,
}

impl ReadinessProbe {
    /// Per-request timeout applied by default.
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(1);
    /// Pause between attempts applied by default.
    pub const DEFAULT_BACKOFF: Duration = Duration::from_millis(300);
    /// Overall wait applied by default.
    pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(15);

    /// Creates a probe for `url` with default timings.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
            backoff: Self::DEFAULT_BACKOFF,
            deadline: Self::DEFAULT_DEADLINE,
        }
    }

    /// Sets the overall wait.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the pause between attempts.
    #[must_use]
    pub const fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Returns the probed URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Waits until the URL answers with a 2xx status.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::NotReady`] when the deadline passes first and
    /// [`LauncherError::Client`] when the HTTP client cannot be built.
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn wait(&self) -> Result<(), LauncherError> {
        let client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()?;
        let started = Instant::now();

        loop {
            match client.get(&self.url).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::info!(elapsed = ?started.elapsed(), "server is ready");
                    return Ok(());
                }
                Ok(response) => {
                    tracing::debug!(status = %response.status(), "server not ready yet");
                }
                Err(err) => tracing::debug!(%err, "server not reachable yet"),
            }

            if started.elapsed() + self.backoff >= self.deadline {
                return Err(LauncherError::NotReady {
                    url: self.url.clone(),
                    waited: started.elapsed(),
                });
            }
            tokio::time::sleep(self.backoff).await;
        }
    }
}
