//! Logging configuration using tracing
//!
//! The TUI owns stdout, so all output goes to a daily rolling log file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "CAMPUS_LOG";

const LOG_FILE_NAME: &str = "campus.log";
const DEFAULT_FILTER: &str = "unicode_campus=info,campus_app=info,campus_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/unicode-campus/logs/`.
/// Log level is controlled by the `CAMPUS_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CAMPUS_LOG=debug campus
/// CAMPUS_LOG=campus_app=trace campus --role admin
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("UniCode Campus starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
///
/// Files inside are named `campus.log.YYYY-MM-DD`, one per day.
pub fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("unicode-campus").join("logs"))
}
