use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;
use crate::settings::Logging;

/// File name prefix of the rolling log files.
const LOG_FILE_PREFIX: &str = "abacus.log";

/// Installs the global tracing subscriber.
///
/// Logs go to stderr, filtered by `RUST_LOG` or else `logging.filter`. When
/// `logging.directory` is set they are also written to a daily-rolling file there;
/// the returned guard must be kept alive until shutdown so buffered lines are flushed.
pub fn init_tracing(logging: &Logging) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .map_err(|e| ConfigError::Telemetry(e.to_string()))?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime::rfc_3339())
        .with_target(false);

    let (file_layer, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_timer(LocalTime::rfc_3339())
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::Telemetry(e.to_string()))?;

    Ok(guard)
}
