//! Logging configuration using tracing
//!
//! The terminal belongs to the UI, so all output goes to a rolling file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const APP_DIR: &str = "gigflow-case-study";

const LOG_FILE: &str = "gigflow.log";

/// Environment variable holding the tracing filter
pub const LOG_ENV: &str = "GIGFLOW_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/gigflow-case-study/logs/`.
/// Log level is controlled by the `GIGFLOW_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GIGFLOW_LOG=debug gigflow
/// GIGFLOW_LOG=gigflow_case_study=trace gigflow
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("gigflow_case_study=info,warn"));

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
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("GigFlow case study v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(log_dir)
}

/// Get the log directory path
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_app_scoped() {
        let dir = log_directory();
        assert!(dir.ends_with("gigflow-case-study/logs"));
    }
}
