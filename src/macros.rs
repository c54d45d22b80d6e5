//! Logging macros for ergonomic log message formatting.
//!
//! These macros take a logger followed by `format!`-style arguments. The
//! message is only rendered when the logger would write it, and each macro
//! evaluates to the `Result` of the logging call.
//!
//! # Examples
//!
//! ```
//! use simple_console_logger::prelude::*;
//! use simple_console_logger::{info, warn};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started")?;
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! // Ignore a write failure explicitly
//! let _ = warn!(logger, "Retry attempt {} of {}", 3, 5);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use simple_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use simple_console_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_args($level, ::std::format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use simple_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use simple_console_logger::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use simple_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use simple_console_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// Whether the process exits afterwards depends on the logger's
/// [`FatalPolicy`](crate::FatalPolicy).
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        let logger = Logger::builder().writer(buf.clone()).build();
        (logger, buf)
    }

    fn output(buf: &SharedBuf) -> String {
        String::from_utf8(buf.0.lock().clone()).expect("utf-8 output")
    }

    #[test]
    fn test_log_macro() {
        let (logger, buf) = capture();
        log!(logger, LogLevel::Info, "Formatted: {}", 42).unwrap();
        assert!(output(&buf).ends_with("[info] Formatted: 42\n"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, buf) = capture();
        trace!(logger, "t {}", 1).unwrap();
        debug!(logger, "d").unwrap();
        info!(logger, "i").unwrap();
        warn!(logger, "w {:?}", [0, 1, 2, 3]).unwrap();
        error!(logger, "e").unwrap();
        fatal!(logger, "f").unwrap();

        let out = output(&buf);
        let levels: Vec<&str> = out
            .lines()
            .map(|l| l.split(['[', ']']).nth(1).unwrap_or(""))
            .collect();
        assert_eq!(levels, ["trace", "debug", "info", "warn", "error", "fatal"]);
        assert!(out.contains("[warn] w [0, 1, 2, 3]"));
    }

    #[test]
    fn test_macro_respects_threshold() {
        let (logger, buf) = capture();
        logger.set_min_level(LogLevel::Error);
        debug!(logger, "This message shouldn't be printed!").unwrap();
        assert!(output(&buf).is_empty());
    }
}
