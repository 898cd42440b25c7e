//! Logging initialization for the command line tool.
//!
//! Library modules only emit `tracing` events; installing a subscriber is
//! left to the binary.

use std::path::Path;

use anyhow::Context;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber.
///
/// # Arguments
/// * `verbosity` - 0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE
/// * `log_file` - If set, write plain-text logs to this file instead of stderr
/// * `json` - If true, stderr output is JSON lines
///
/// `RUST_LOG` takes precedence over `verbosity` when set.
///
/// The returned guard flushes the file writer when dropped, so keep it alive
/// for the lifetime of the program.
pub fn init(
    verbosity: u8,
    log_file: Option<&Path>,
    json: bool,
) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(level_for_verbosity(verbosity).into())
    });

    let subscriber = tracing_subscriber::registry().with(filter);

    if let Some(path) = log_file {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("Invalid log file path: {}", path.display()))?;

        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(writer))
            .try_init()?;

        return Ok(Some(guard));
    }

    if json {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        subscriber
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(None)
}

fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
