//! Task list endpoints.

use super::{AppState, error::ApiError};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// Wire representation of a task.
#[derive(Debug, Serialize)]
pub struct TaskJson {
    id: String,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl From<Task> for TaskJson {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().as_str().to_owned(),
            completed: task.completed(),
            created_at: task.created_at(),
        }
    }
}

/// Response envelope for task listings.
#[derive(Debug, Serialize)]
pub struct TasksResponse {
    tasks: Vec<TaskJson>,
}

/// Response envelope for a single task.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    task: TaskJson,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self { task: task.into() }
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Deserialize)]
pub struct CreateTaskBody {
    title: String,
}

/// Body of `PUT /tasks/{task_id}`.
///
/// `title` distinguishes an omitted field (`None`) from an explicit `null`
/// (`Some(None)`).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskBody {
    #[serde(default, deserialize_with = "present")]
    title: Option<Option<String>>,
    #[serde(default)]
    completed: Option<bool>,
}

impl UpdateTaskBody {
    fn into_request(self) -> Result<UpdateTaskRequest, ApiError> {
        let mut request = UpdateTaskRequest::new();
        match self.title {
            Some(Some(title)) => request = request.with_title(title),
            Some(None) => return Err(ApiError::Validation(TaskDomainError::NullTitle.to_string())),
            None => {}
        }
        if let Some(completed) = self.completed {
            request = request.with_completed(completed);
        }
        Ok(request)
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse().map_err(|_| ApiError::task_not_found())
}

/// `GET /tasks`
#[tracing::instrument(skip(state))]
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<TasksResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.tasks.list().await?;
    Ok(Json(TasksResponse {
        tasks: tasks.into_iter().map(TaskJson::from).collect(),
    }))
}

/// `POST /tasks`
#[tracing::instrument(skip(state, payload))]
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let task = state.tasks.create(CreateTaskRequest::new(body.title)).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// `PUT /tasks/{task_id}`
#[tracing::instrument(skip(state, payload))]
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(task_id): Path<String>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let request = body.into_request()?;
    let id = parse_task_id(&task_id)?;
    let task = state.tasks.update(id, request).await?;
    Ok(Json(task.into()))
}

/// `DELETE /tasks/{task_id}`
#[tracing::instrument(skip(state))]
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&task_id)?;
    state.tasks.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
