use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use riffle::app::{App, AppEvent};
use riffle::config::Config;
use riffle::registry::FeedRegistry;
use riffle::ui;

/// Get the config directory path (~/.config/riffle/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("riffle");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(name = "riffle", about = "Terminal RSS reader with a fixed feed catalog")]
struct Args {
    /// Path to the feeds catalog file (default: ~/.config/riffle/feeds.toml)
    #[arg(long, value_name = "FILE")]
    feeds: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let feeds_path = match args.feeds {
        Some(path) => path,
        None => get_config_dir()?.join("feeds.toml"),
    };

    // A bad catalog refuses to start: nothing below this point runs with an
    // empty or invalid registry.
    let config = match Config::load(&feeds_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Example {} contents:", feeds_path.display());
            eprintln!();
            eprintln!("  [[feeds]]");
            eprintln!("  url = \"https://blog.rust-lang.org/feed.xml\"");
            eprintln!("  name = \"Rust Blog\"");
            std::process::exit(1);
        }
    };

    let registry = match FeedRegistry::from_descriptors(config.descriptors()) {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            eprintln!("Error in {}: {}", feeds_path.display(), e);
            std::process::exit(1);
        }
    };

    tracing::info!(feeds = registry.len(), "Catalog validated");

    let fetch_timeout = Duration::from_secs(config.fetch_timeout_secs);
    let mut app = App::new(registry, fetch_timeout).context("Failed to create application")?;

    // Create event channel for background load tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
