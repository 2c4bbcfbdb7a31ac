//! Step definitions for pomodoro timer BDD scenarios.

pub mod given;
pub mod when;
pub mod world;
