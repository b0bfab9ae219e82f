//! Logging Infrastructure
//!
//! Structured logging setup for development and production environments.

use std::path::Path;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` wins over `log_level` when set. Returns `false` when a global
/// subscriber was already installed, in which case this call changes nothing.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) -> bool {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let result = match (json, log_dir.and_then(file_appender)) {
        (true, Some(writer)) => subscriber.json().with_writer(writer).try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(writer)) => subscriber.with_writer(writer).try_init(),
        (false, None) => subscriber.try_init(),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            // Goes to the subscriber that is already installed
            tracing::debug!("Logger already initialized, keeping it: {}", e);
            false
        }
    }
}

/// Daily rolling file in `dir`, `None` if the directory does not exist
fn file_appender(dir: &str) -> Option<RollingFileAppender> {
    let log_path = Path::new(dir);
    if log_path.exists()
        && let Some(dir_str) = log_path.to_str()
    {
        return Some(tracing_appender::rolling::daily(dir_str, "storefront-core"));
    }
    eprintln!("Log directory {} does not exist, logging to stdout", dir);
    None
}
