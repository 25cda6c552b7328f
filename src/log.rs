// src/log.rs
use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::LOG_FILE;

/// File log under `dir` (e.g. `.store/debug.log`), plus stderr when asked.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and closes the file writer. Returns `None` when there is no file
/// writer: the directory is unusable (logging goes on without the file) or a
/// global subscriber is already installed (tests, double init). Never panics.
pub fn init(dir: &Path, to_stderr: bool) -> Option<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .map_err(|e| eprintln!("Log: no file log in {}: {e}", dir.display()))
        .ok();
    let (writer, guard) = appender.map(tracing_appender::non_blocking).unzip();

    // RUST_LOG wins; otherwise info to the file, warnings only on stderr
    let filter = |default: &str| EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let file_layer = writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
            .with_filter(filter("info"))
    });

    let stderr_layer = to_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(filter("warn"))
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .ok()
        .and(guard)
}
