//! Focus widget: local task list and pomodoro timer service.
//!
//! This crate backs a small desktop widget. It keeps an in-memory task list
//! and a single pomodoro timer and exposes both over HTTP for the widget's
//! frontend.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: pure types and transitions with no infrastructure dependencies
//! - **Ports**: abstract trait interfaces for storage
//! - **Adapters**: concrete implementations of ports
//! - **Services**: orchestration injected into the request layer at startup
//!
//! # Modules
//!
//! - [`task`]: task list storage and partial updates
//! - [`pomodoro`]: the interval timer state machine
//! - [`api`]: HTTP routes, error mapping, and static frontend hosting
//! - [`config`]: environment-driven server settings
//! - [`desktop`]: launcher support for supervising the server process
//! - [`telemetry`]: logging setup

pub mod api;
pub mod config;
pub mod desktop;
pub mod pomodoro;
pub mod task;
pub mod telemetry;
