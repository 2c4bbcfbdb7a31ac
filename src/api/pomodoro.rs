//! Pomodoro timer endpoints.

use super::{AppState, error::ApiError};
use crate::pomodoro::domain::{PomodoroSettings, PomodoroSnapshot};
use crate::task::ports::TaskRepository;
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Response envelope carrying the timer state.
#[derive(Debug, Serialize)]
pub struct PomodoroResponse {
    state: PomodoroSnapshot,
}

impl From<PomodoroSnapshot> for PomodoroResponse {
    fn from(state: PomodoroSnapshot) -> Self {
        Self { state }
    }
}

/// Body of `POST /pomodoro/start`. The whole body may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct StartBody {
    #[serde(default)]
    phase: Option<String>,
}

/// Body of `POST /pomodoro/settings`. Omitted fields take their defaults.
#[derive(Debug, Deserialize)]
pub struct SettingsBody {
    #[serde(default = "default_work_minutes")]
    work_minutes: i64,
    #[serde(default = "default_short_break_minutes")]
    short_break_minutes: i64,
    #[serde(default = "default_long_break_minutes")]
    long_break_minutes: i64,
}

fn default_work_minutes() -> i64 {
    i64::from(PomodoroSettings::DEFAULT_WORK_MINUTES)
}

fn default_short_break_minutes() -> i64 {
    i64::from(PomodoroSettings::DEFAULT_SHORT_BREAK_MINUTES)
}

fn default_long_break_minutes() -> i64 {
    i64::from(PomodoroSettings::DEFAULT_LONG_BREAK_MINUTES)
}

fn parse_start_body(body: &[u8]) -> Result<StartBody, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(StartBody::default());
    }
    let parsed: Option<StartBody> = serde_json::from_slice(body)?;
    Ok(parsed.unwrap_or_default())
}

/// `GET /pomodoro`
#[tracing::instrument(skip(state))]
pub async fn get_pomodoro<R, C>(State(state): State<AppState<R, C>>) -> Json<PomodoroResponse>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Json(state.pomodoro.get_state().into())
}

/// `POST /pomodoro/start`
#[tracing::instrument(skip(state, body))]
pub async fn start_pomodoro<R, C>(
    State(state): State<AppState<R, C>>,
    body: Bytes,
) -> Result<Json<PomodoroResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let request = parse_start_body(&body)?;
    let snapshot = state.pomodoro.start(request.phase.as_deref())?;
    Ok(Json(snapshot.into()))
}

/// `POST /pomodoro/stop`
#[tracing::instrument(skip(state))]
pub async fn stop_pomodoro<R, C>(State(state): State<AppState<R, C>>) -> Json<PomodoroResponse>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Json(state.pomodoro.stop().into())
}

/// `POST /pomodoro/settings`
#[tracing::instrument(skip(state, payload))]
pub async fn update_pomodoro_settings<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<SettingsBody>, JsonRejection>,
) -> Result<Json<PomodoroResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let settings = PomodoroSettings::new(
        body.work_minutes,
        body.short_break_minutes,
        body.long_break_minutes,
    )?;
    Ok(Json(state.pomodoro.update_settings(settings).into()))
}
