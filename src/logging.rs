use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable naming the directory the log file is written to.
pub const LOG_DIR_ENV: &str = "MAZEWORKS_LOG_DIR";

/// Installs the global subscriber, writing to `<dir>/<file_name>` through a
/// non-blocking appender so stdout stays free for the maze itself.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Keep the returned
/// guard alive until exit, dropping it flushes pending lines.
pub fn init(file_name: &str) -> WorkerGuard {
    let dir = std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(env_filter)
        .init();
    guard
}
