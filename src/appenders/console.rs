//! Console appender implementation
//!
//! Writes formatted lines to stdout, stderr, both (split by severity), or any
//! `Write` implementation. Each line is rendered, colored and terminated
//! before the destination lock is taken, then written with a single
//! `write_all`, so concurrent callers never interleave partial lines.

use crate::core::{
    color, Appender, ColorMode, EmitterMetrics, FlushPolicy, LevelFilter, LineFormatter, LogLevel,
    LogRecord, LoggerError, Result, Target,
};
use parking_lot::{Mutex, RwLock};
use std::io::{self, IsTerminal, Write};

enum Destination {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    Split {
        stdout: io::Stdout,
        stderr: io::Stderr,
    },
    Writer(Box<dyn Write + Send>),
}

impl Destination {
    fn for_target(target: Target) -> Self {
        match target {
            Target::Stdout => Destination::Stdout(io::stdout()),
            Target::Stderr => Destination::Stderr(io::stderr()),
            Target::Split => Destination::Split {
                stdout: io::stdout(),
                stderr: io::stderr(),
            },
        }
    }

    /// Stream that receives `level`, with its name for error reporting
    fn stream(&mut self, level: LogLevel) -> (&'static str, &mut dyn Write) {
        match self {
            Destination::Stdout(out) => ("stdout", out as &mut dyn Write),
            Destination::Stderr(err) => ("stderr", err as &mut dyn Write),
            Destination::Split { stdout, stderr } => {
                if routes_to_stderr(level) {
                    ("stderr", stderr as &mut dyn Write)
                } else {
                    ("stdout", stdout as &mut dyn Write)
                }
            }
            Destination::Writer(writer) => ("writer", writer.as_mut() as &mut dyn Write),
        }
    }

    /// Terminal status of the (stdout-side, stderr-side) streams
    fn terminals(&self) -> (bool, bool) {
        match self {
            Destination::Stdout(out) => {
                let tty = out.is_terminal();
                (tty, tty)
            }
            Destination::Stderr(err) => {
                let tty = err.is_terminal();
                (tty, tty)
            }
            Destination::Split { stdout, stderr } => (stdout.is_terminal(), stderr.is_terminal()),
            Destination::Writer(_) => (false, false),
        }
    }

    fn write_line(&mut self, level: LogLevel, bytes: &[u8], flush: FlushPolicy) -> Result<()> {
        let (name, stream) = self.stream(level);
        stream
            .write_all(bytes)
            .map_err(|e| LoggerError::write(name, e))?;
        if flush == FlushPolicy::EveryLine {
            stream.flush().map_err(|e| LoggerError::flush(name, e))?;
        }
        Ok(())
    }

    fn flush_all(&mut self) -> Result<()> {
        match self {
            Destination::Stdout(out) => out.flush().map_err(|e| LoggerError::flush("stdout", e)),
            Destination::Stderr(err) => err.flush().map_err(|e| LoggerError::flush("stderr", e)),
            Destination::Split { stdout, stderr } => {
                stdout.flush().map_err(|e| LoggerError::flush("stdout", e))?;
                stderr.flush().map_err(|e| LoggerError::flush("stderr", e))
            }
            Destination::Writer(writer) => {
                writer.flush().map_err(|e| LoggerError::flush("writer", e))
            }
        }
    }
}

/// Split routing: warn and above go to stderr
#[inline]
fn routes_to_stderr(level: LogLevel) -> bool {
    level >= LogLevel::Warn
}

/// Resolved color decision for each side of the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Colorize {
    stdout: bool,
    stderr: bool,
}

impl Colorize {
    fn resolve(mode: ColorMode, destination: &Destination) -> Self {
        let (stdout_tty, stderr_tty) = destination.terminals();
        Self {
            stdout: mode.resolve(stdout_tty),
            stderr: mode.resolve(stderr_tty),
        }
    }

    fn for_level(&self, split: bool, level: LogLevel) -> bool {
        if split && routes_to_stderr(level) {
            self.stderr
        } else {
            self.stdout
        }
    }
}

/// The console emitter.
///
/// # Example
///
/// ```
/// use simple_console_logger::appenders::ConsoleAppender;
/// use simple_console_logger::{ColorMode, LevelFilter, Target};
///
/// let appender = ConsoleAppender::with_target(Target::Split)
///     .with_color_mode(ColorMode::Never)
///     .with_min_level(LevelFilter::Info);
/// ```
pub struct ConsoleAppender {
    min_level: RwLock<LevelFilter>,
    destination: Mutex<Destination>,
    split: bool,
    color_mode: ColorMode,
    colorize: Colorize,
    flush_policy: FlushPolicy,
    formatter: LineFormatter,
    metrics: EmitterMetrics,
}

impl ConsoleAppender {
    /// Emitter on stdout with automatic color detection
    pub fn new() -> Self {
        Self::with_target(Target::Stdout)
    }

    pub fn with_target(target: Target) -> Self {
        Self::from_destination(Destination::for_target(target), target == Target::Split)
    }

    /// Emitter writing to an arbitrary writer.
    ///
    /// Writers are never treated as terminals, so [`ColorMode::Auto`] yields
    /// plain output; use [`ColorMode::Always`] to force escape sequences.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::from_destination(Destination::Writer(Box::new(writer)), false)
    }

    fn from_destination(destination: Destination, split: bool) -> Self {
        let color_mode = ColorMode::default();
        Self {
            min_level: RwLock::new(LevelFilter::default()),
            colorize: Colorize::resolve(color_mode, &destination),
            destination: Mutex::new(destination),
            split,
            color_mode,
            flush_policy: FlushPolicy::default(),
            formatter: LineFormatter,
            metrics: EmitterMetrics::new(),
        }
    }

    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self.colorize = Colorize::resolve(mode, self.destination.get_mut());
        self
    }

    /// Shorthand for `ColorMode::Always` / `ColorMode::Never`
    #[must_use]
    pub fn with_colors(self, use_colors: bool) -> Self {
        self.with_color_mode(if use_colors {
            ColorMode::Always
        } else {
            ColorMode::Never
        })
    }

    #[must_use]
    pub fn with_min_level(mut self, filter: impl Into<LevelFilter>) -> Self {
        *self.min_level.get_mut() = filter.into();
        self
    }

    #[must_use]
    pub fn with_flush_policy(mut self, policy: FlushPolicy) -> Self {
        self.flush_policy = policy;
        self
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read()
    }

    /// Change the threshold of a live emitter
    pub fn set_min_level(&self, filter: impl Into<LevelFilter>) {
        *self.min_level.write() = filter.into();
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Whether lines at `level` are wrapped in escape sequences
    pub fn colors_enabled(&self, level: LogLevel) -> bool {
        self.colorize.for_level(self.split, level)
    }

    pub fn metrics(&self) -> &EmitterMetrics {
        &self.metrics
    }

    /// Render `record` exactly as it would be written, without the line terminator
    pub fn render(&self, record: &LogRecord) -> String {
        let mut buf = String::new();
        self.render_into(record, &mut buf);
        buf
    }

    fn render_into(&self, record: &LogRecord, buf: &mut String) {
        let level = record.level();
        if self.colors_enabled(level) {
            let line = self.formatter.format(record);
            color::paint_into(level, &line, buf);
        } else {
            self.formatter.format_into(record, buf);
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let level = record.level();
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let mut buf = String::with_capacity(record.message().len() + 48);
        self.render_into(record, &mut buf);
        buf.push('\n');

        let result = self
            .destination
            .lock()
            .write_line(level, buf.as_bytes(), self.flush_policy);

        match result {
            Ok(()) => self.metrics.record_written(),
            Err(_) => self.metrics.record_write_failure(),
        }
        result
    }

    fn flush(&self) -> Result<()> {
        let result = self.destination.lock().flush_all();
        if result.is_err() {
            self.metrics.record_write_failure();
        }
        result
    }

    #[inline]
    fn enabled(&self, level: LogLevel) -> bool {
        self.min_level.read().allows(level)
    }

    fn name(&self) -> &str {
        "console"
    }
}
