//! Server configuration.
//!
//! Values are read from environment variables prefixed with `FOCUS_WIDGET_`:
//!
//! - `FOCUS_WIDGET_HOST`: bind host, default `127.0.0.1`.
//! - `FOCUS_WIDGET_PORT`: bind port, default `8000`.
//! - `FOCUS_WIDGET_FRONTEND_DIST`: built frontend directory served under
//!   `/app`, default `frontend/dist`.
//! - `FOCUS_WIDGET_CORS_ORIGINS`: comma-separated origins allowed to call the
//!   API from a browser, default the local frontend dev server.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "FOCUS_WIDGET";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration sources could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Host and port do not form a socket address.
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Host interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the built frontend.
    #[serde(default = "default_frontend_dist")]
    pub frontend_dist: PathBuf,
    /// Browser origins permitted by CORS.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Loads configuration from `FOCUS_WIDGET_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a variable cannot be converted to
    /// its setting type.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("cors_origins");
        Self::from_builder(config::Config::builder().add_source(environment))
    }

    /// Loads configuration from an arbitrary builder, applying defaults for
    /// unset keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when the sources cannot be built or
    /// deserialized.
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBindAddress`] when `host` is not an IP
    /// address.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| ConfigError::InvalidBindAddress(raw))
    }

    /// Returns the base URL clients use to reach the server.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            frontend_dist: default_frontend_dist(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

const fn default_port() -> u16 {
    8000
}

fn default_frontend_dist() -> PathBuf {
    PathBuf::from("frontend").join("dist")
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_owned(),
        "http://127.0.0.1:5173".to_owned(),
    ]
}
