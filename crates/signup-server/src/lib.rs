//! Process-level wiring for the signup service: configuration, static assets
//! and the outer middleware stack around [`signup_api::api_router`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use serde::Deserialize;
use signup_core::store::ActivityStore;
use tower_http::{services::ServeDir, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `SIGNUP_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// Directory served under `/static`.
  #[serde(default = "default_static_dir")]
  pub static_dir: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8000 }

fn default_static_dir() -> PathBuf { PathBuf::from("static") }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       default_host(),
      port:       default_port(),
      static_dir: default_static_dir(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Read `path` (if it exists) layered under `SIGNUP_*` environment variables.
pub fn load_config(path: &Path) -> anyhow::Result<ServerConfig> {
  let settings = config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("SIGNUP"))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")
}

// ─── Application ──────────────────────────────────────────────────────────────

/// The full application: API routes, `/static` assets and request tracing.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: ActivityStore + 'static,
{
  signup_api::api_router(store)
    .nest_service("/static", ServeDir::new(&config.static_dir))
    .layer(TraceLayer::new_for_http())
}
