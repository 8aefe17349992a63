//! signup server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), seeds an
//! in-memory activity directory, and serves the JSON API plus the static
//! landing page over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use signup_server::load_config;
use signup_store_memory::MemoryStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Activity signup server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Print the built-in activity table as JSON and exit.
  #[arg(long)]
  print_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  if cli.print_seed {
    println!(
      "{}",
      signup_core::seed::to_json_pretty().context("failed to render seed table")?
    );
    return Ok(());
  }

  let server_cfg = load_config(&cli.config)?;

  let store = MemoryStore::seeded().context("failed to seed activity directory")?;
  let app = signup_server::app(Arc::new(store), &server_cfg);

  if !server_cfg.static_dir.is_dir() {
    tracing::warn!(
      static_dir = %server_cfg.static_dir.display(),
      "static directory not found; the landing page will 404",
    );
  }

  let address = server_cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
