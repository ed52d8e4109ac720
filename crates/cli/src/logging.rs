//! Logging setup
//!
//! Terminal output of the commands goes to stdout, so log lines go to stderr.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default filter when RUST_LOG is unset
const DEFAULT_FILTER: &str = "lineless=info";

/// Rolling log file name inside `--log-dir`
const LOG_FILE_NAME: &str = "lineless.log";

/// Install the global subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: `lineless=info`)
/// - `LINELESS_LOG_FORMAT`: `pretty` (default) or `json`
///
/// The returned guard must be held until exit so the file writer flushes.
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let log_format =
        std::env::var("LINELESS_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to create env filter")?;

    let stderr_layer = match log_format.as_str() {
        // Production: JSON structured logging
        "json" => fmt::layer().json().with_writer(std::io::stderr).boxed(),
        // Development: Pretty formatting with colors
        _ => fmt::layer().pretty().with_writer(std::io::stderr).boxed(),
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
