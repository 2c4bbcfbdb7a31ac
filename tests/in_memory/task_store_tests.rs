//! Task service flows over the in-memory repository.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use focus_widget::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDomainError, TaskId, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{CreateTaskRequest, TaskService, TaskServiceError, UpdateTaskRequest},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_task_lifecycle(service: TestService) -> Result<(), eyre::Report> {
    let created = service.create(CreateTaskRequest::new("Plan week")).await?;
    let done = service
        .update(created.id(), UpdateTaskRequest::new().with_completed(true))
        .await?;
    assert!(done.completed());
    assert_eq!(done.title().as_str(), "Plan week");

    service.delete(created.id()).await?;

    assert!(service.list().await?.is_empty());
    let revived = service
        .update(created.id(), UpdateTaskRequest::new().with_title("back"))
        .await;
    assert!(matches!(
        revived,
        Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(_)))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_are_all_kept(service: TestService) -> Result<(), eyre::Report> {
    let shared = Arc::new(service);
    let mut handles = Vec::new();
    for n in 0..16 {
        let worker = Arc::clone(&shared);
        handles.push(tokio::spawn(async move {
            worker.create(CreateTaskRequest::new(format!("task {n}"))).await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let tasks = shared.list().await?;
    let ids: HashSet<_> = tasks.iter().map(|task| task.id()).collect();
    assert_eq!(tasks.len(), 16);
    assert_eq!(ids.len(), 16);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_title_on_missing_task_is_a_validation_error(
    service: TestService,
) -> Result<(), eyre::Report> {
    let created = service.create(CreateTaskRequest::new("kept")).await?;
    service.delete(created.id()).await?;

    let result = service
        .update(created.id(), UpdateTaskRequest::new().with_title(""))
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::EmptyTitle))
    ));
    Ok(())
}

/// In-memory repository that pauses before every read and write so that
/// overlapping service calls interleave.
#[derive(Clone, Default)]
struct SlowRepository {
    inner: InMemoryTaskRepository,
}

impl SlowRepository {
    async fn pause() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[async_trait]
impl TaskRepository for SlowRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.inner.store(task).await
    }

    async fn update(&self, id: TaskId, update: TaskUpdate) -> TaskRepositoryResult<Task> {
        Self::pause().await;
        self.inner.update(id, update).await
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.inner.remove(id).await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Self::pause().await;
        self.inner.find_by_id(id).await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.inner.list().await
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overlapping_partial_updates_both_land() -> Result<(), eyre::Report> {
    let service = Arc::new(TaskService::new(
        Arc::new(SlowRepository::default()),
        Arc::new(DefaultClock),
    ));
    let created = service.create(CreateTaskRequest::new("A")).await?;
    let id = created.id();

    let rename = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .update(id, UpdateTaskRequest::new().with_title("B"))
                .await
        })
    };
    let finish = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .update(id, UpdateTaskRequest::new().with_completed(true))
                .await
        })
    };
    rename.await??;
    finish.await??;

    let tasks = service.list().await?;
    assert_eq!(tasks.len(), 1);
    let stored = tasks.first().ok_or_else(|| eyre::eyre!("task missing"))?;
    assert_eq!(stored.title().as_str(), "B");
    assert!(stored.completed());
    Ok(())
}
