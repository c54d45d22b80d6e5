//! # Simple Console Logger
//!
//! A small, thread-safe console logger. Every record becomes exactly one line:
//!
//! ```text
//! 2023-05-17 08:04:09 [warn] disk usage at 91%
//! ```
//!
//! ## Features
//!
//! - **Leveled**: trace, debug, info, warn, error and fatal, with a per-emitter threshold
//! - **Colorized**: ANSI colors per level when writing to a terminal
//! - **Thread Safe**: whole lines are written under one lock, never interleaved
//! - **Explicit**: no hidden global; loggers are built and passed around, with an
//!   opt-in process-wide default via [`init`]
//!
//! ## Example
//!
//! ```
//! use simple_console_logger::prelude::*;
//! use simple_console_logger::info;
//!
//! let logger = Logger::builder().min_level(LogLevel::Info).build();
//! info!(logger, "Server listening on port {}", 8080)?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::ConsoleAppender;
    pub use crate::core::{
        Appender, ColorMode, FatalPolicy, FlushPolicy, LevelFilter, LogLevel, LogRecord, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, Result, Target,
    };
}

pub use crate::appenders::ConsoleAppender;
pub use crate::core::{
    global, init, Appender, ColorMode, ColorPair, EmitterMetrics, FatalPolicy, FlushPolicy,
    LevelFilter, LineFormatter, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, Result, Target,
};
