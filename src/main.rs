//! UniCode Campus - a terminal front end for the UniCode.com learning marketplace
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use campus_app::config::{apply_overrides, default_config_path, load_settings};
use campus_app::Settings;
use campus_core::prelude::*;
use campus_core::{Page, Role};
use clap::Parser;

/// UniCode Campus - browse courses, lessons, quizzes and dashboards in the terminal
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(about = "A terminal front end for the UniCode.com learning marketplace", long_about = None)]
struct Args {
    /// Initial role (student, lecturer, admin)
    #[arg(long, value_name = "ROLE")]
    role: Option<Role>,

    /// Initial page id (e.g. home, courses, quiz, dashboard)
    #[arg(long, value_name = "PAGE")]
    page: Option<Page>,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    campus_core::logging::init()?;

    debug!("Command line: {:?}", args);

    let mut settings = match args.config.or_else(default_config_path) {
        Some(path) => load_settings(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    };
    apply_overrides(&mut settings, args.role, args.page);

    let result = campus_tui::run(settings).await;

    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("Fatal error: {:?}", e);
        } else {
            error!("Application error: {:?}", e);
        }
    }

    info!("UniCode Campus exiting");
    result
}
