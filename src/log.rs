// src/log.rs
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, fmt::time::Uptime};

use crate::config::consts::{LOG_DIR, LOG_FILE};

/// Route `tracing` events to `.store/debug.log`.
///
/// `RUST_LOG` wins over `default_level` when set. Keep the returned guard alive
/// for the lifetime of the program, or buffered lines are lost on exit.
/// Returns `None` if the log file can't be opened or a global subscriber was
/// already installed (tests, embedding).
pub fn init(default_level: &str) -> Option<WorkerGuard> {
    init_in(Path::new(LOG_DIR), default_level)
}

pub fn init_in(dir: &Path, default_level: &str) -> Option<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_timer(Uptime::default())
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()
        .map(|_| guard)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
