// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Logging subscriber

use std::io::stderr;

use anyhow::{Context, Result};
use server::config::LogLevel;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter directive for the configured level. `RUST_LOG` takes precedence.
fn filter(log_level: LogLevel) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.as_str()))
        .with_context(|| format!("Failed to create log filter for level {log_level}"))
}

/// Initialize the global logger, writing to stderr off the request path
pub fn new(log_level: LogLevel) -> Result<WorkerGuard> {
    let (non_blocking_stderr, stderr_guard) = tracing_appender::non_blocking(stderr());

    let logger = Registry::default().with(filter(log_level)?).with(
        fmt::Layer::default()
            .with_writer(non_blocking_stderr)
            .with_file(true)
            .with_line_number(true),
    );

    tracing::subscriber::set_global_default(logger).context("Failed to initialize logger")?;

    Ok(stderr_guard)
}
