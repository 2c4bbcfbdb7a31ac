//! In-memory repository contract tests.

use chrono::{DateTime, Utc};
use focus_widget::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PersistedTaskData, Task, TaskId, TaskTitle, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use rstest::{fixture, rstest};

#[fixture]
fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn stored_task(title: &str) -> Result<Task, eyre::Report> {
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new(title)?,
        completed: false,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_identifier(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let task = stored_task("kept")?;
    repo.store(&task).await?;

    let result = repo.store(&task).await;

    assert!(matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()));
    assert_eq!(repo.list().await?, vec![task]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_keeps_position_in_listing(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let first = stored_task("first")?;
    let second = stored_task("second")?;
    repo.store(&first).await?;
    repo.store(&second).await?;

    let renamed = repo
        .update(
            first.id(),
            TaskUpdate::new()
                .with_title(TaskTitle::new("renamed")?)
                .with_completed(true),
        )
        .await?;

    assert_eq!(renamed.id(), first.id());
    assert_eq!(renamed.title().as_str(), "renamed");
    assert!(renamed.completed());
    assert_eq!(renamed.created_at(), first.created_at());
    assert_eq!(repo.list().await?, vec![renamed, second]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_and_remove_report_missing_tasks(
    repo: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let ghost = stored_task("ghost")?;

    let updated = repo
        .update(ghost.id(), TaskUpdate::new().with_completed(true))
        .await;
    let removed = repo.remove(ghost.id()).await;

    assert!(matches!(updated, Err(TaskRepositoryError::NotFound(_))));
    assert!(matches!(removed, Err(TaskRepositoryError::NotFound(_))));
    assert!(repo.list().await?.is_empty());
    assert_eq!(repo.find_by_id(ghost.id()).await?, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_storage(repo: InMemoryTaskRepository) -> Result<(), eyre::Report> {
    let task = stored_task("shared")?;
    let other_handle = repo.clone();

    other_handle.store(&task).await?;

    assert_eq!(repo.find_by_id(task.id()).await?, Some(task));
    Ok(())
}
