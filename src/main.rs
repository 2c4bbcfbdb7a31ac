//! Focus widget HTTP server entry point.
//!
//! Builds the task and pomodoro services once, injects them into the router,
//! and serves until Ctrl-C or SIGTERM.

use focus_widget::{
    api::{self, AppState},
    config::ServerConfig,
    pomodoro::services::PomodoroService,
    task::{adapters::memory::InMemoryTaskRepository, services::TaskService},
    telemetry,
};
use mockable::DefaultClock;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init(telemetry::DEFAULT_FILTER)?;

    let config = ServerConfig::from_env()?;
    let address = config.bind_address()?;

    let clock = Arc::new(DefaultClock);
    let state = AppState::new(
        TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::clone(&clock)),
        PomodoroService::new(clock),
    );
    let app = api::app(state, &config);

    let listener = TcpListener::bind(address).await?;
    info!("Focus widget API listening on {}", config.base_url());

    api::serve(listener, app).await?;
    info!("Focus widget API stopped");
    Ok(())
}
