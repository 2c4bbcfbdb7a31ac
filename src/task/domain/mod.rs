//! Domain model for the task list.
//!
//! Tasks are small records with a validated title and a completion flag. All
//! storage concerns live behind the [`crate::task::ports`] boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskUpdate};
