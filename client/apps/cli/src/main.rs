//! Workout CLI Entry Point
//!
//! Uses `anyhow` for top-level errors; library crates report through
//! `AuthError` / `WorkoutError`, which convert into `kernel::error::AppError`.

mod app;
mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout::WorkoutConfig;

use crate::app::App;
use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cli=info,auth=info,workout=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Command::Hash { file } = &cli.command {
        return app::hash_document(file.as_deref());
    }

    let api = app::resolve_api_config(cli.api_url.as_deref(), |name| std::env::var(name).ok())?;

    let app = App::new(api, WorkoutConfig::from_env())?;
    app.run(cli).await
}
