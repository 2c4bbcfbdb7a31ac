//! Storage adapters for the task module.
//!
//! - [`memory::InMemoryTaskRepository`]: process-lifetime, lock-guarded
//!   storage used by the server and by tests.

pub mod memory;
