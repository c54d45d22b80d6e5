//! Appender trait for log output destinations

use super::{error::Result, log_level::LogLevel, log_record::LogRecord};

/// A destination for log records.
///
/// Appenders are shared between threads behind a [`Logger`](super::Logger)
/// handle, so they take `&self` and serialize writes internally.
pub trait Appender: Send + Sync {
    /// Emit `record`, or drop it silently if its level is below the threshold
    fn append(&self, record: &LogRecord) -> Result<()>;

    fn flush(&self) -> Result<()>;

    /// Whether a record at `level` would be written
    fn enabled(&self, level: LogLevel) -> bool {
        let _ = level;
        true
    }

    fn name(&self) -> &str;
}
