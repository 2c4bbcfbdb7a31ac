//! Pomodoro interval timer.
//!
//! The timer is a two-state machine, stopped or running an interval, over a
//! current phase and a set of phase durations. Expiry is never enforced: the
//! remaining time is derived from the clock whenever the state is read.
//!
//! - Domain types and pure transitions in [`domain`]
//! - The lock-guarded, clock-driven engine in [`services`]

pub mod domain;
pub mod services;
