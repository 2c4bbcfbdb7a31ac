//! Service layer for task creation, listing, update, and removal.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskTitle, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
}

impl CreateTaskRequest {
    /// Creates a request with the raw, not yet validated title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Request payload for partially updating a task.
///
/// Only the fields set through the builder methods are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    fn into_update(self) -> Result<TaskUpdate, TaskDomainError> {
        let mut update = TaskUpdate::new();
        if let Some(title) = self.title {
            update = update.with_title(TaskTitle::new(title)?);
        }
        if let Some(completed) = self.completed {
            update = update.with_completed(completed);
        }
        Ok(update)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task list orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is empty or too long,
    /// or [`TaskServiceError::Repository`] when the repository rejects it.
    #[tracing::instrument(skip(self, request))]
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let task = Task::new(title, &*self.clock);
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// The title is validated before the repository is consulted, so a
    /// rejected request never modifies stored state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for an invalid title and
    /// [`TaskServiceError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    #[tracing::instrument(skip(self, request))]
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let update = request.into_update()?;
        if update.is_empty() {
            return self
                .repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| TaskRepositoryError::NotFound(id).into());
        }

        let task = self.repository.update(id, update).await?;
        tracing::info!("task updated");
        Ok(task)
    }

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.remove(id).await?;
        tracing::info!("task deleted");
        Ok(())
    }
}
