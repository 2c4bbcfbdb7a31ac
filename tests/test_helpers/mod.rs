//! Shared helpers for integration tests.

pub mod clock;

use std::env;
use std::ffi::OsString;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use focus_widget::api::{self, AppState};
use focus_widget::config::ServerConfig;
use focus_widget::pomodoro::services::PomodoroService;
use focus_widget::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};
use serde_json::Value;
use tower::ServiceExt;

use clock::ManualClock;

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Guard that applies a scoped environment variable update.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets multiple environment variables for the guard lifetime.
    pub fn set_many(changes: &[(OsString, Option<OsString>)]) -> Self {
        let lock = env_lock();
        let mut previous = Vec::with_capacity(changes.len());

        for (key, value) in changes {
            previous.push((key.clone(), env::var_os(key)));
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(&key, &previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Application state wired to in-memory storage and a manual clock.
pub type TestState = AppState<InMemoryTaskRepository, ManualClock>;

/// Router under test together with the clock that drives it.
pub struct TestApp {
    pub router: Router,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Builds the API router over fresh services.
    pub fn new() -> Self {
        let (state, clock) = fresh_state();
        Self {
            router: api::router(state),
            clock,
        }
    }

    /// Builds the complete application, frontend and CORS included.
    pub fn with_config(config: &ServerConfig) -> Self {
        let (state, clock) = fresh_state();
        Self {
            router: api::app(state, config),
            clock,
        }
    }

    /// Sends a prepared request and returns the raw response.
    pub async fn call(&self, request: Request<Body>) -> Result<Response, eyre::Report> {
        Ok(self.router.clone().oneshot(request).await?)
    }

    /// Sends a request with an optional JSON body and returns the status and
    /// the decoded body, `Value::Null` when the body is empty.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
    ) -> Result<(StatusCode, Value), eyre::Report> {
        let body = match body {
            Some(json) => Body::from(serde_json::to_vec(json)?),
            None => Body::empty(),
        };
        self.send_raw(method, uri, body).await
    }

    /// Sends a request with a raw body labelled as JSON.
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        body: Body,
    ) -> Result<(StatusCode, Value), eyre::Report> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)?;
        let response = self.call(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        if bytes.is_empty() {
            return Ok((status, Value::Null));
        }
        Ok((status, serde_json::from_slice(&bytes)?))
    }
}

fn fresh_state() -> (TestState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let state = AppState::new(
        TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&clock),
        ),
        PomodoroService::new(Arc::clone(&clock)),
    );
    (state, clock)
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
