//! Main logger implementation
//!
//! A [`Logger`] is a cheap, cloneable handle over a set of appenders. There is
//! no implicit global instance: construct one with [`Logger::builder`] or
//! [`Logger::from_config`] and pass it where it is needed, or install it once
//! as the process-wide default with [`init`].

use super::{
    appender::Appender,
    config::{FatalPolicy, FlushPolicy, LoggerConfig, Target},
    color::ColorMode,
    error::{LoggerError, Result},
    log_level::{LevelFilter, LogLevel},
    log_record::LogRecord,
    metrics::EmitterMetrics,
};
use crate::appenders::ConsoleAppender;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, OnceLock};

struct Inner {
    console: Option<Arc<ConsoleAppender>>,
    appenders: Vec<Arc<dyn Appender>>,
    fatal_policy: FatalPolicy,
}

#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

impl Logger {
    /// Console logger on stdout with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use simple_console_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .target(Target::Split)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Console logger described by `config`
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        LoggerBuilder::from_config(config).build()
    }

    /// Console logger configured from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(&LoggerConfig::from_env()?))
    }

    /// The built-in console emitter, unless it was disabled on the builder
    pub fn console(&self) -> Option<&ConsoleAppender> {
        self.inner.console.as_deref()
    }

    /// Metrics of the console emitter
    pub fn metrics(&self) -> Option<&EmitterMetrics> {
        self.console().map(ConsoleAppender::metrics)
    }

    /// Change the console emitter's threshold
    pub fn set_min_level(&self, filter: impl Into<LevelFilter>) {
        if let Some(console) = self.console() {
            console.set_min_level(filter);
        }
    }

    pub fn fatal_policy(&self) -> FatalPolicy {
        self.inner.fatal_policy
    }

    /// Whether any appender would write a record at `level`
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.inner.appenders.iter().any(|a| a.enabled(level))
    }

    /// Log `message` at `level`.
    ///
    /// The record (and its timestamp) is captured before any appender lock is
    /// taken. Every appender is tried; the first failure is returned.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        let record = LogRecord::new(level, message);
        self.dispatch(&record)
    }

    /// Log pre-formatted arguments, rendering them only if `level` is enabled
    pub fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        match args.as_str() {
            Some(s) => self.log(level, s),
            None => self.log(level, args.to_string()),
        }
    }

    /// Send an already captured record to every appender.
    ///
    /// Under [`FatalPolicy::Exit`] the process exits after a fatal record has
    /// been written by at least one appender. A fatal record that every
    /// appender filters out (or fails to write) never terminates the process,
    /// whichever entry point produced it.
    pub fn dispatch(&self, record: &LogRecord) -> Result<()> {
        let level = record.level();
        let mut written = false;
        let mut first_error = None;
        for appender in &self.inner.appenders {
            let accepted = appender.enabled(level);
            match appender.append(record) {
                Ok(()) => written |= accepted,
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        if written && self.exits_on(level) {
            if let FatalPolicy::Exit(code) = self.inner.fatal_policy {
                self.exit_after_fatal(code);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Whether a written record at `level` ends the process
    pub fn exits_on(&self, level: LogLevel) -> bool {
        level == LogLevel::Fatal && matches!(self.inner.fatal_policy, FatalPolicy::Exit(_))
    }

    fn exit_after_fatal(&self, code: i32) -> ! {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before fatal exit: {}", e);
        }
        std::process::exit(code)
    }

    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for appender in &self.inner.appenders {
            if let Err(e) = appender.flush() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Trace, message)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Fatal, message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.inner.appenders.iter().map(|a| a.name()).collect();
        f.debug_struct("Logger")
            .field("appenders", &names)
            .field("fatal_policy", &self.inner.fatal_policy)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// The builder always configures one console emitter (unless
/// [`without_console`](Self::without_console) is called); extra appenders
/// are added next to it.
///
/// # Example
/// ```
/// use simple_console_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Warn)
///     .color(ColorMode::Never)
///     .fatal_policy(FatalPolicy::Continue)
///     .build();
/// assert!(!logger.enabled(LogLevel::Info));
/// ```
pub struct LoggerBuilder {
    min_level: LevelFilter,
    target: Target,
    writer: Option<Box<dyn Write + Send>>,
    color: ColorMode,
    flush_policy: FlushPolicy,
    fatal_policy: FatalPolicy,
    console: bool,
    appenders: Vec<Arc<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LevelFilter::default(),
            target: Target::default(),
            writer: None,
            color: ColorMode::default(),
            flush_policy: FlushPolicy::default(),
            fatal_policy: FatalPolicy::default(),
            console: true,
            appenders: Vec::new(),
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new()
            .min_level(config.min_level)
            .target(config.target)
            .color(config.color)
            .flush_policy(config.flush)
            .fatal_policy(config.fatal)
    }

    /// Set the console emitter's minimum level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, filter: impl Into<LevelFilter>) -> Self {
        self.min_level = filter.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Send console output to `writer` instead of the standard streams
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, mode: ColorMode) -> Self {
        self.color = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flush_policy(mut self, policy: FlushPolicy) -> Self {
        self.flush_policy = policy;
        self
    }

    /// What to do after a fatal record; default is [`FatalPolicy::Continue`]
    #[must_use = "builder methods return a new value"]
    pub fn fatal_policy(mut self, policy: FatalPolicy) -> Self {
        self.fatal_policy = policy;
        self
    }

    /// Build without the console emitter
    #[must_use = "builder methods return a new value"]
    pub fn without_console(mut self) -> Self {
        self.console = false;
        self
    }

    /// Add an appender next to the console emitter
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Arc::new(appender));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let console = if self.console {
            let appender = match self.writer {
                Some(writer) => ConsoleAppender::with_writer(writer),
                None => ConsoleAppender::with_target(self.target),
            };
            Some(Arc::new(
                appender
                    .with_color_mode(self.color)
                    .with_flush_policy(self.flush_policy)
                    .with_min_level(self.min_level),
            ))
        } else {
            None
        };

        let mut appenders: Vec<Arc<dyn Appender>> = Vec::with_capacity(self.appenders.len() + 1);
        if let Some(ref console) = console {
            appenders.push(Arc::clone(console) as Arc<dyn Appender>);
        }
        appenders.extend(self.appenders);

        Logger {
            inner: Arc::new(Inner {
                console,
                appenders,
                fatal_policy: self.fatal_policy,
            }),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide default.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if called more than once.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// The process-wide default logger, if [`init`] has been called
pub fn global() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

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

    impl SharedBuf {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().clone())
                .expect("utf-8 output")
                .lines()
                .map(String::from)
                .collect()
        }
    }

    struct CountingAppender {
        count: AtomicUsize,
        fail: bool,
    }

    impl Appender for CountingAppender {
        fn append(&self, _record: &LogRecord) -> Result<()> {
            self.count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(LoggerError::write("counting", io::Error::other("refused")))
            } else {
                Ok(())
            }
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn test_builder_basic() {
        let buf = SharedBuf::default();
        let logger = Logger::builder().writer(buf.clone()).build();

        logger.info("hello").unwrap();
        let lines = buf.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" [info] hello"));
    }

    #[test]
    fn test_builder_min_level() {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .writer(buf.clone())
            .min_level(LogLevel::Warn)
            .build();

        logger.debug("dropped").unwrap();
        logger.warn("kept").unwrap();
        assert_eq!(buf.lines().len(), 1);
        assert_eq!(logger.metrics().map(|m| m.filtered_count()), Some(1));
    }

    #[test]
    fn test_set_min_level_on_clone_is_shared() {
        let buf = SharedBuf::default();
        let logger = Logger::builder().writer(buf.clone()).build();
        let clone = logger.clone();

        clone.set_min_level(LevelFilter::Off);
        logger.fatal("nothing").unwrap();
        assert!(buf.lines().is_empty());
        assert!(!logger.enabled(LogLevel::Fatal));
    }

    #[test]
    fn test_from_config() {
        let buf = SharedBuf::default();
        let config = LoggerConfig::new()
            .with_min_level(LogLevel::Error)
            .with_color(ColorMode::Always);
        let logger = LoggerBuilder::from_config(&config).writer(buf.clone()).build();

        logger.warn("no").unwrap();
        logger.error("bad").unwrap();
        let lines = buf.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("\x1b[31m"));
        assert!(lines[0].ends_with(" [error] bad\x1b[0m"));
    }

    #[test]
    fn test_extra_appender_receives_records() {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .writer(buf.clone())
            .appender(CountingAppender {
                count: AtomicUsize::new(0),
                fail: false,
            })
            .build();

        logger.info("one").unwrap();
        logger.error("two").unwrap();
        assert_eq!(buf.lines().len(), 2);
        assert_eq!(format!("{:?}", logger), "Logger { appenders: [\"console\", \"counting\"], fatal_policy: Continue }");
    }

    #[test]
    fn test_failing_appender_does_not_block_others() {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .appender(CountingAppender {
                count: AtomicUsize::new(0),
                fail: true,
            })
            .writer(buf.clone())
            .build();

        let err = logger.info("still written").unwrap_err();
        assert!(matches!(err, LoggerError::Write { .. }));
        assert_eq!(buf.lines().len(), 1);
    }

    #[test]
    fn test_without_console() {
        let logger = Logger::builder().without_console().build();
        assert!(logger.console().is_none());
        assert!(logger.metrics().is_none());
        assert!(!logger.enabled(LogLevel::Fatal));
        logger.fatal("into the void").unwrap();
    }

    #[test]
    fn test_log_args_skips_disabled() {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .writer(buf.clone())
            .min_level(LogLevel::Info)
            .build();

        logger
            .log_args(LogLevel::Debug, format_args!("{}", 1))
            .unwrap();
        logger
            .log_args(LogLevel::Info, format_args!("value {}", 2))
            .unwrap();
        let lines = buf.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[info] value 2"));
    }

    #[test]
    fn test_fatal_continues_by_default() {
        let buf = SharedBuf::default();
        let logger = Logger::builder().writer(buf.clone()).build();
        assert_eq!(logger.fatal_policy(), FatalPolicy::Continue);
        logger.fatal("first").unwrap();
        logger.info("after").unwrap();
        assert_eq!(buf.lines().len(), 2);
    }

    #[test]
    fn test_exits_on() {
        let logger = Logger::builder()
            .writer(SharedBuf::default())
            .fatal_policy(FatalPolicy::Exit(3))
            .build();
        assert!(logger.exits_on(LogLevel::Fatal));
        assert!(!logger.exits_on(LogLevel::Error));
        assert!(!Logger::builder().writer(SharedBuf::default()).build().exits_on(LogLevel::Fatal));
    }

    #[test]
    fn test_filtered_fatal_does_not_exit() {
        // Exiting here would take the whole test binary down.
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .writer(buf.clone())
            .min_level(LevelFilter::Off)
            .fatal_policy(FatalPolicy::Exit(3))
            .build();

        logger.fatal("method").unwrap();
        crate::fatal!(logger, "macro {}", 1).unwrap();
        logger
            .dispatch(&LogRecord::new(LogLevel::Fatal, "record"))
            .unwrap();
        assert!(buf.lines().is_empty());
    }

    #[test]
    fn test_failed_fatal_write_does_not_exit() {
        let logger = Logger::builder()
            .without_console()
            .appender(CountingAppender {
                count: AtomicUsize::new(0),
                fail: true,
            })
            .fatal_policy(FatalPolicy::Exit(3))
            .build();

        assert!(logger.fatal("refused").is_err());
    }

    #[test]
    fn test_flush() {
        let logger = Logger::builder().writer(SharedBuf::default()).build();
        logger.flush().unwrap();
    }
}
