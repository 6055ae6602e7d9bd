//! Structured JSONL logging to a file plus human-readable stderr output.
//!
//! - **JSONL to file** (~/.shortcut-engine/logs/shortcut-engine.jsonl)
//! - **Compact to stderr** for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use shortcut_engine::logging;
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init("info");
//!
//! tracing::info!(event_type = "shortcut_edit", shortcut = "new_topic", "Shortcut updated");
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::app_dir;

const LOG_FILE_NAME: &str = "shortcut-engine.jsonl";

/// UTC timestamps with millisecond precision for the JSONL file.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// `default_filter` applies when RUST_LOG is not set. If the log file cannot
/// be opened, logging continues on stderr only.
pub fn init(default_filter: &str) -> LoggingGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let log_path = log_path();
    if let Err(e) = fs::create_dir_all(log_dir()) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path.as_path());

    let (json_layer, file_guard) = match file {
        Ok(file) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::new(TIMESTAMP_FORMAT))
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!(
                "[LOGGING] Failed to open log file {}: {}",
                log_path.display(),
                e
            );
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::debug!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Get the log directory path (~/.shortcut-engine/logs/)
fn log_dir() -> PathBuf {
    app_dir().join("logs")
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}
