//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    /// All levels in ascending severity order
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Lowercase name as it appears between the brackets of an output line
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Position of this level in [`LogLevel::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Recover a level from its discriminant.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not name a level. Levels only come from this
    /// enum, so an out-of-range index is a bug in the caller.
    pub(crate) fn from_index(index: usize) -> Self {
        match Self::ALL.get(index) {
            Some(level) => *level,
            None => panic!("unrecognized log level discriminant: {}", index),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::config(
                "level",
                format!("invalid log level: '{}'", s),
            )),
        }
    }
}

/// Minimum-level threshold held by an emitter.
///
/// Every [`LogLevel`] has a matching variant; `Off` sits above `Fatal` and
/// suppresses all output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LevelFilter {
    #[default]
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    Off = 6,
}

impl LevelFilter {
    /// Whether a record at `level` passes this threshold
    #[inline]
    pub fn allows(self, level: LogLevel) -> bool {
        (level as u8) >= (self as u8)
    }

    /// The least severe level that still passes, or `None` for `Off`
    pub fn to_level(self) -> Option<LogLevel> {
        match self {
            LevelFilter::Off => None,
            filter => Some(LogLevel::from_index(filter as usize)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.to_level() {
            Some(level) => level.as_str(),
            None => "off",
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Fatal => LevelFilter::Fatal,
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelFilter {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" => Ok(LevelFilter::Off),
            _ => s.parse::<LogLevel>().map(LevelFilter::from),
        }
    }
}
