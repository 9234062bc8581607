use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ohsub_config::{Config, InputSource};
use ohsub_types::LangMode;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod display;
pub mod events;
pub mod io;
pub mod profile;
pub mod services;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::services::{build_note_writer, build_services};
use self::state::AppState;

/// Type or capture subtitle text, get a translation or definition back
#[derive(Parser, Debug)]
#[command(name = "ohsub", version)]
struct Args {
    /// Profile name under the data directory
    #[arg(long, default_value = "main")]
    profile: String,

    /// Language pair: zh-en or zh-ja
    #[arg(long)]
    mode: Option<LangMode>,

    /// Extra text source: stdin, clipboard or websocket
    #[arg(long)]
    source: Option<InputSource>,

    /// Quiet period before a lookup fires
    #[arg(long)]
    debounce_ms: Option<u64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if atty::is(atty::Stream::Stderr) {
        builder.init();
    } else {
        builder.json().init();
    }
}

fn load_config(args: &Args) -> Config {
    let root = profile::data_dir();

    if let Err(e) = profile::init_user_config(&root) {
        tracing::warn!("Could not initialize {}: {e}", root.display());
    }

    let mut config = profile::load_user_profile(&root, &args.profile).unwrap_or_else(|e| {
        tracing::error!("Failed to load profile '{}': {e}", args.profile);
        Config::default()
    });

    config.apply_env();

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(source) = args.source {
        config.input.source = source;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.debounce_ms = debounce_ms;
    }

    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = load_config(&args);

    let services = build_services(config.mode, &config)?;
    let note_writer = build_note_writer(&config, &profile::data_dir()).await?;
    let quiet = Duration::from_millis(config.debounce_ms);

    tracing::info!(
        "Starting in {} mode, debounce {}ms ({:?})",
        config.mode,
        config.debounce_ms,
        services
    );

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(services, note_writer, quiet);

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task exited, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.abort_all();

    Ok(())
}
