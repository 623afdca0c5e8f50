//! Log installation
//!
//! The terminal belongs to the UI, so logs go to a daily-rolling file.
//! Records from the `log` facade used by the library crates are forwarded
//! into the same subscriber.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `debug` or
/// `stun_admin_core=trace,info`
pub const LOG_ENV: &str = "STUN_ADMIN_LOG";

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "stun-admin-tui.log";

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered lines get flushed.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("Logging to {}", log_dir.display());
    Ok(guard)
}
