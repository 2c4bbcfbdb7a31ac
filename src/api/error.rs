//! Mapping from domain failures to HTTP responses.

use crate::pomodoro::domain::PomodoroDomainError;
use crate::task::{ports::TaskRepositoryError, services::TaskServiceError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

const TASK_NOT_FOUND: &str = "Task not found";
const INTERNAL_DETAIL: &str = "An unexpected error occurred while processing your request.";

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub detail: String,
}

/// Per-request failure. None of these alter server state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input.
    #[error("{0}")]
    Validation(String),

    /// The addressed task does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request named an unknown timer phase.
    #[error("{0}")]
    InvalidPhase(String),

    /// Unexpected server-side failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the error for a task id that resolves to no task.
    #[must_use]
    pub fn task_not_found() -> Self {
        Self::NotFound(TASK_NOT_FOUND.to_owned())
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidPhase(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Domain(domain) => Self::Validation(domain.to_string()),
            TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self::task_not_found()
            }
            TaskServiceError::Repository(other) => Self::Internal(other.to_string()),
        }
    }
}

impl From<PomodoroDomainError> for ApiError {
    fn from(err: PomodoroDomainError) -> Self {
        match err {
            PomodoroDomainError::InvalidPhase(_) => Self::InvalidPhase(err.to_string()),
            PomodoroDomainError::SettingOutOfRange { .. } => Self::Validation(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation(format!("invalid request body: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::Internal(message) => {
                tracing::error!(%message, "request failed");
                INTERNAL_DETAIL.to_owned()
            }
            Self::Validation(message) | Self::NotFound(message) | Self::InvalidPhase(message) => {
                tracing::debug!(%status, %message, "request rejected");
                message
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
