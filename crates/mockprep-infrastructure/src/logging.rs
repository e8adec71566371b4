//! File logging for the CLI.
//!
//! Logs go to a daily-rolling file so they never interleave with the REPL.

use std::path::Path;

use mockprep_core::PrepError;
use mockprep_core::config::DEFAULT_LOG_LEVEL;
use mockprep_core::error::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "mockprep.log";

/// Builds the filter from a directive such as `info` or
/// `mockprep_application=debug,info`. Falls back to the default level when
/// the directive does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber writing to `<logs_dir>/mockprep.log.YYYY-MM-DD`.
///
/// Keep the returned guard alive for the lifetime of the process; dropping
/// it flushes and stops the writer.
pub fn init_logging(logs_dir: &Path, directive: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)?;
    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| PrepError::internal(format!("Failed to install logger: {e}")))?;

    Ok(guard)
}
