/*
[INPUT]:  Logging configuration (enable, level, directory, file naming, rotation)
[OUTPUT]: Installed JSON file subscriber and its flush guard
[POS]:    Observability layer - file sink for client tracing events
[UPDATE]: When log format, rotation options, or level mapping change
*/

use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

pub use tracing_appender::non_blocking::WorkerGuard;

use crate::config::{LogConfig, LogLevel, LogRotation};
use crate::http::{GdcError, Result};

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Minutely => Rotation::MINUTELY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Rolling appender writing `<path>/<filename>.<date>.<extension>`
pub fn file_appender(config: &LogConfig) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(config.rotation.into())
        .filename_prefix(&config.filename)
        .filename_suffix(&config.extension)
        .build(&config.path)
        .map_err(|e| {
            GdcError::Config(format!(
                "Cannot open log directory {}: {e}",
                config.path.display()
            ))
        })
}

/// Install a global JSON subscriber writing to the configured log file
///
/// Returns `None` when logging is disabled. Keep the guard alive for the
/// lifetime of the process; dropping it flushes and stops the writer.
pub fn init_file_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    if !config.enable {
        return Ok(None);
    }

    let (writer, guard) = tracing_appender::non_blocking(file_appender(config)?);
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_max_level(LevelFilter::from(config.level))
        .with_writer(writer)
        .try_init()
        .map_err(|e| GdcError::Config(format!("Cannot install log subscriber: {e}")))?;

    Ok(Some(guard))
}
