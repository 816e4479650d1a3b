use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use renzi_types::AppEvent;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod profile;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "renzi", about = "Chinese text image translator and flashcard deck")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory watched for image drops
    #[arg(long)]
    watch_dir: Option<String>,

    /// Target language code for translations
    #[arg(long)]
    target_lang: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(dir) = cli.watch_dir {
        config.watcher.drop_dir = dir;
    }
    if let Some(lang) = cli.target_lang {
        config.translator.to_lang = lang;
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks();

    // The streak is evaluated once per session, at startup
    controller.command_sender().send(AppEvent::SessionStart).await?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
            controller.shutdown();
        }
    }

    Ok(())
}
