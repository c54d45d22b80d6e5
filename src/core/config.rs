//! Logger configuration
//!
//! A [`LoggerConfig`] can be built in code, parsed from JSON, or read from the
//! environment. Every string-valued option is validated when the configuration
//! is parsed, so a logger is never constructed from an unknown level or mode.
//!
//! Environment variables:
//!
//! | Variable               | Values                                        |
//! |------------------------|-----------------------------------------------|
//! | `SIMPLE_LOGGER_LEVEL`  | `trace` `debug` `info` `warn` `error` `fatal` `off` |
//! | `SIMPLE_LOGGER_COLOR`  | `auto` `always` `never`                       |
//! | `SIMPLE_LOGGER_TARGET` | `stdout` `stderr` `split`                     |
//! | `SIMPLE_LOGGER_FLUSH`  | `line` `manual`                               |
//! | `SIMPLE_LOGGER_FATAL`  | `continue` `exit` `exit:<code>`               |
//! | `NO_COLOR`             | any non-empty value forces `never` when `SIMPLE_LOGGER_COLOR` is unset |

use super::color::ColorMode;
use super::error::{LoggerError, Result};
use super::log_level::{LevelFilter, LogLevel};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ENV_LEVEL: &str = "SIMPLE_LOGGER_LEVEL";
pub const ENV_COLOR: &str = "SIMPLE_LOGGER_COLOR";
pub const ENV_TARGET: &str = "SIMPLE_LOGGER_TARGET";
pub const ENV_FLUSH: &str = "SIMPLE_LOGGER_FLUSH";
pub const ENV_FATAL: &str = "SIMPLE_LOGGER_FATAL";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Standard stream(s) a console emitter writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
    /// trace, debug and info to stdout; warn, error and fatal to stderr
    Split,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Stdout => "stdout",
            Target::Stderr => "stderr",
            Target::Split => "split",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "stdout" => Ok(Target::Stdout),
            "stderr" => Ok(Target::Stderr),
            "split" => Ok(Target::Split),
            _ => Err(LoggerError::config(
                "target",
                format!("invalid output target: '{}'", s),
            )),
        }
    }
}

/// When written lines become visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlushPolicy {
    /// Flush inside the write lock after every line
    #[default]
    EveryLine,
    /// Leave buffered bytes until [`Logger::flush`](super::Logger::flush)
    Manual,
}

impl FromStr for FlushPolicy {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "line" | "every_line" => Ok(FlushPolicy::EveryLine),
            "manual" => Ok(FlushPolicy::Manual),
            _ => Err(LoggerError::config(
                "flush",
                format!("invalid flush policy: '{}'", s),
            )),
        }
    }
}

/// What happens after a fatal record has been written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FatalPolicy {
    /// Fatal is only a severity; the process keeps running
    #[default]
    Continue,
    /// Flush all appenders, then exit the process with this status code
    Exit(i32),
}

impl FatalPolicy {
    /// Exit code used by the bare `exit` spelling
    pub const DEFAULT_EXIT_CODE: i32 = 1;
}

impl FromStr for FatalPolicy {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().to_lowercase();
        match value.as_str() {
            "continue" => return Ok(FatalPolicy::Continue),
            "exit" => return Ok(FatalPolicy::Exit(Self::DEFAULT_EXIT_CODE)),
            _ => {}
        }
        value
            .strip_prefix("exit:")
            .and_then(|code| code.parse::<i32>().ok())
            .map(FatalPolicy::Exit)
            .ok_or_else(|| LoggerError::config("fatal", format!("invalid fatal policy: '{}'", s)))
    }
}

/// Complete configuration for a console logger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub min_level: LevelFilter,
    pub target: Target,
    pub color: ColorMode,
    pub flush: FlushPolicy,
    pub fatal: FatalPolicy,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_level(mut self, filter: impl Into<LevelFilter>) -> Self {
        self.min_level = filter.into();
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_flush(mut self, flush: FlushPolicy) -> Self {
        self.flush = flush;
        self
    }

    #[must_use]
    pub fn with_fatal(mut self, fatal: FatalPolicy) -> Self {
        self.fatal = fatal;
        self
    }

    /// Parse a JSON document; missing keys take their defaults
    ///
    /// # Example
    ///
    /// ```
    /// use simple_console_logger::{ColorMode, LevelFilter, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_json(r#"{"min_level": "warn", "color": "never"}"#).unwrap();
    /// assert_eq!(config.min_level, LevelFilter::Warn);
    /// assert_eq!(config.color, ColorMode::Never);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set but unparsable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_LEVEL) {
            config.min_level = value.parse()?;
        }
        match lookup(ENV_COLOR) {
            Some(value) => config.color = value.parse()?,
            None => {
                if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
                    config.color = ColorMode::Never;
                }
            }
        }
        if let Some(value) = lookup(ENV_TARGET) {
            config.target = value.parse()?;
        }
        if let Some(value) = lookup(ENV_FLUSH) {
            config.flush = value.parse()?;
        }
        if let Some(value) = lookup(ENV_FATAL) {
            config.fatal = value.parse()?;
        }

        Ok(config)
    }

    /// Whether a record at `level` passes the configured threshold
    pub fn allows(&self, level: LogLevel) -> bool {
        self.min_level.allows(level)
    }
}
