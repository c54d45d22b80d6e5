//! Core logger types and traits

pub mod appender;
pub mod color;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;

pub use appender::Appender;
pub use color::{ColorMode, ColorPair, LEVEL_COLORS, RESET};
pub use config::{FatalPolicy, FlushPolicy, LoggerConfig, Target};
pub use error::{LoggerError, Result};
pub use formatter::{LineFormatter, TIMESTAMP_FORMAT};
pub use log_level::{LevelFilter, LogLevel};
pub use log_record::LogRecord;
pub use logger::{global, init, Logger, LoggerBuilder};
pub use metrics::EmitterMetrics;
