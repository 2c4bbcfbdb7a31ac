//! HTTP request layer.
//!
//! Translates verbs and paths into single calls on the task and pomodoro
//! services and maps their failures to status codes through [`ApiError`].
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /tasks`, `POST /tasks` | [`tasks::list_tasks`], [`tasks::create_task`] |
//! | `PUT /tasks/{task_id}`, `DELETE /tasks/{task_id}` | [`tasks::update_task`], [`tasks::delete_task`] |
//! | `GET /pomodoro` | [`pomodoro::get_pomodoro`] |
//! | `POST /pomodoro/start`, `/stop`, `/settings` | [`pomodoro::start_pomodoro`], [`pomodoro::stop_pomodoro`], [`pomodoro::update_pomodoro_settings`] |

pub mod error;
pub mod frontend;
pub mod pomodoro;
pub mod tasks;

pub use error::{ApiError, ErrorBody};

use crate::config::ServerConfig;
use crate::pomodoro::services::PomodoroService;
use crate::task::{ports::TaskRepository, services::TaskService};
use axum::{
    Router,
    routing::{get, post, put},
};
use mockable::Clock;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Services shared by every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task list service.
    pub tasks: Arc<TaskService<R, C>>,
    /// Pomodoro timer engine.
    pub pomodoro: Arc<PomodoroService<C>>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Bundles the services for injection into the router.
    #[must_use]
    pub fn new(tasks: TaskService<R, C>, pomodoro: PomodoroService<C>) -> Self {
        Self {
            tasks: Arc::new(tasks),
            pomodoro: Arc::new(pomodoro),
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            pomodoro: Arc::clone(&self.pomodoro),
        }
    }
}

/// Builds the API routes over `state`.
#[must_use]
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(tasks::list_tasks::<R, C>).post(tasks::create_task::<R, C>),
        )
        .route(
            "/tasks/{task_id}",
            put(tasks::update_task::<R, C>).delete(tasks::delete_task::<R, C>),
        )
        .route("/pomodoro", get(pomodoro::get_pomodoro::<R, C>))
        .route("/pomodoro/start", post(pomodoro::start_pomodoro::<R, C>))
        .route("/pomodoro/stop", post(pomodoro::stop_pomodoro::<R, C>))
        .route(
            "/pomodoro/settings",
            post(pomodoro::update_pomodoro_settings::<R, C>),
        )
        .with_state(state)
}

/// Builds the API routes plus frontend hosting, wrapped in tracing and CORS
/// layers.
#[must_use]
pub fn app<R, C>(state: AppState<R, C>, config: &ServerConfig) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    router(state)
        .merge(frontend::frontend_router(&config.frontend_dist))
        .layer(TraceLayer::new_for_http())
        .layer(frontend::cors_layer(&config.cors_origins))
}

/// Serves `app` on `listener` until Ctrl-C or, on Unix, SIGTERM is received.
///
/// # Errors
///
/// Returns the underlying I/O error when the server fails.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "unable to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "unable to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
