//! Per-invocation log file.
//!
//! Every run appends to `<hook-name>.log`, by default next to the
//! executable. The returned [`LogGuard`] owns the background writer; keep it
//! alive until `main` returns so the last lines are flushed.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (default `debug`).
pub const LOG_FILTER_ENV: &str = "MAM_HOOK_LOG";

/// Keeps the file writer alive for the process lifetime.
#[must_use = "dropping the guard stops log output"]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
    /// Log file in use, `None` when logging fell back to stderr.
    pub path: Option<PathBuf>,
}

/// Directory holding the log file: `dir` if given, else the executable's directory.
#[must_use]
pub fn log_dir(dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = dir {
        return dir.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Initialise logging for one hook run.
///
/// Lines go to `<dir>/<name>.log`. If the file cannot be created, logging
/// goes to stderr; stdout is reserved for the protocol.
pub fn init(name: &str, dir: Option<&Path>) -> LogGuard {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));
    let dir = log_dir(dir);
    let file_name = format!("{name}.log");

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&file_name)
        .build(&dir);

    match appender {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .try_init();
            LogGuard {
                _worker: Some(guard),
                path: Some(dir.join(file_name)),
            }
        }
        Err(e) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
            tracing::warn!("cannot open log file in {}: {e}", dir.display());
            LogGuard {
                _worker: None,
                path: None,
            }
        }
    }
}
