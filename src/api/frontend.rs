//! Static hosting of the built frontend and browser access rules.

use axum::{Router, http::HeaderValue, response::Redirect, routing::get};
use std::path::Path;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

/// Path under which the frontend is served.
pub const APP_PATH: &str = "/app";

/// Returns routes serving `dist` under [`APP_PATH`] with `/` redirecting
/// there, or no routes when `dist` is not a directory.
#[must_use]
pub fn frontend_router(dist: &Path) -> Router {
    if !dist.is_dir() {
        tracing::warn!(
            dist = %dist.display(),
            "frontend build not found, serving API only"
        );
        return Router::new();
    }

    tracing::info!(dist = %dist.display(), "serving frontend under {APP_PATH}");
    Router::new()
        .route("/", get(|| async { Redirect::temporary(APP_PATH) }))
        .nest_service(
            APP_PATH,
            ServeDir::new(dist).append_index_html_on_directories(true),
        )
}

/// Builds the CORS policy for the given origins.
///
/// Origins that are not valid header values are skipped with a warning.
#[must_use]
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%origin, %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
