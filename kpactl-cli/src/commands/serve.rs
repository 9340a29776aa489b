//! HTTP server command for the kpactl planning API
//!
//! Opens the SQLite file, ensures the schema, then serves until shutdown.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use kpactl_server::db::{create_pool_with_options, schema, DEFAULT_MAX_CONNECTIONS};
use kpactl_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "KPACTL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Path to the SQLite database file (created if missing)
    #[arg(long, env = "KPACTL_DB_PATH", default_value = "kpa.db")]
    pub db_path: PathBuf,

    /// Maximum pooled database connections
    #[arg(long, env = "KPACTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    ensure_parent_dir(&args.db_path)?;

    tracing::info!("Opening database at {}", args.db_path.display());
    let pool = create_pool_with_options(&args.db_path, args.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", args.db_path.display()))?;

    schema::ensure(&pool)
        .await
        .context("Failed to create schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    tracing::info!("Starting kpactl server on http://{}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

fn ensure_parent_dir(db_path: &Path) -> Result<()> {
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))
        }
        _ => Ok(()),
    }
}
