//! Starts the focus widget server and keeps it alive for the desktop shell.
//!
//! Usage:
//!
//! ```text
//! focus-launcher [--host 127.0.0.1] [--port 8000] [--server-bin PATH]
//!                [--frontend-dist frontend/dist] [--ready-timeout-secs 15]
//! ```
//!
//! The launcher refuses to start without a built frontend, spawns the server
//! binary, polls `GET /pomodoro` until it answers, and reports the widget URL.
//! It then waits for Ctrl-C or for the server to exit, and on the way out
//! terminates the server, killing it if it does not stop within five seconds.

use clap::Parser;
use focus_widget::{
    api::frontend::APP_PATH,
    desktop::{BackendProcess, LauncherError, ReadinessProbe},
    telemetry,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

const SERVER_BIN_NAME: &str = "focus-widget";

/// Command-line arguments for the launcher.
#[derive(Debug, Parser)]
#[command(name = "focus-launcher", about = "Launch the focus widget backend")]
struct Args {
    /// Host the server binds to.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port the server binds to.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Server executable; defaults to `focus-widget` next to this launcher.
    #[arg(long)]
    server_bin: Option<PathBuf>,

    /// Built frontend directory.
    #[arg(long, default_value = "frontend/dist")]
    frontend_dist: PathBuf,

    /// Seconds to wait for the server to answer.
    #[arg(long, default_value_t = 15)]
    ready_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("focus_widget=info,focus_launcher=info")?;
    let args = Args::parse();

    if !args.frontend_dist.is_dir() {
        return Err(LauncherError::MissingFrontend(args.frontend_dist).into());
    }

    let server_bin = match args.server_bin {
        Some(path) => path,
        None => sibling_server_bin()?,
    };
    let backend = BackendProcess::spawn(&server_bin, &args.host, args.port, &args.frontend_dist)?;

    let base_url = format!("http://{}:{}", args.host, args.port);
    let probe = ReadinessProbe::new(format!("{base_url}/pomodoro"))
        .with_deadline(Duration::from_secs(args.ready_timeout_secs));

    info!(url = probe.url(), "waiting for server");
    if let Err(err) = probe.wait().await {
        error!(%err, "server failed to start");
        backend.shutdown(BackendProcess::DEFAULT_GRACE).await?;
        return Err(err.into());
    }

    info!("Focus widget ready at {base_url}{APP_PATH}");
    supervise(backend).await
}

async fn supervise(mut backend: BackendProcess) -> anyhow::Result<()> {
    let exited = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            if let Err(err) = signal {
                warn!(%err, "unable to listen for Ctrl-C, shutting down");
            }
            None
        }
        status = backend.wait() => Some(status?),
    };

    match exited {
        Some(status) => warn!(%status, "server exited on its own"),
        None => {
            let status = backend.shutdown(BackendProcess::DEFAULT_GRACE).await?;
            info!(%status, "server stopped");
        }
    }
    Ok(())
}

fn sibling_server_bin() -> anyhow::Result<PathBuf> {
    let launcher = std::env::current_exe()?;
    let directory = launcher
        .parent()
        .ok_or_else(|| anyhow::anyhow!("launcher path {} has no parent", launcher.display()))?;
    Ok(directory.join(format!("{SERVER_BIN_NAME}{}", std::env::consts::EXE_SUFFIX)))
}
