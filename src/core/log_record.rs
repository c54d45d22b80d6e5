//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local, SubsecRound};

/// A single log event, captured at the call site.
///
/// Records are never mutated after construction. The timestamp is taken from
/// the local clock and truncated to whole seconds, matching the resolution of
/// the rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    level: LogLevel,
    message: String,
    timestamp: DateTime<Local>,
}

impl LogRecord {
    /// Escape line terminators and tabs so one record always renders as one line
    fn sanitize_message(message: &str) -> String {
        if !message.contains(['\n', '\r', '\t']) {
            return message.to_string();
        }
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self::at(level, message, Local::now())
    }

    /// Build a record with an explicit timestamp
    pub fn at(level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        let message = message.into();
        Self {
            level,
            message: Self::sanitize_message(&message),
            timestamp: timestamp.trunc_subsecs(0),
        }
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }
}
