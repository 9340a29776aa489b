//! kpactl CLI - planning tree API server
//!
//! Serves goals (KPAs), sub-goals (KRAs) and tasks over HTTP, backed by a
//! single SQLite file.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "kpactl",
    author,
    version,
    about = "Goals, sub-goals and tasks over a small HTTP/JSON API",
    long_about = "Keep a three-level planning tree (KPA -> KRA -> task) in a local SQLite file \
                  and expose create/read/delete endpoints for it."
)]
struct Cli {
    /// Debug-level logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
