//! Line formatting
//!
//! Renders a [`LogRecord`] into the canonical text line:
//!
//! ```text
//! 2023-05-17 08:04:09 [info] Info message: <8888>
//! ```
//!
//! The timestamp is zero-padded local time at second resolution, the level
//! name is lowercase and bracketed, and the message follows a single space.

use super::log_record::LogRecord;
use std::fmt::Write;

/// strftime pattern for the leading timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stateless renderer for log records.
///
/// # Examples
///
/// ```
/// use simple_console_logger::{LineFormatter, LogLevel, LogRecord};
/// use chrono::{Local, TimeZone};
///
/// let ts = Local.with_ymd_and_hms(2023, 5, 17, 8, 4, 9).single().unwrap();
/// let record = LogRecord::at(LogLevel::Info, "hello", ts);
/// assert_eq!(LineFormatter.format(&record), "2023-05-17 08:04:09 [info] hello");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFormatter;

impl LineFormatter {
    /// Render `record` into a new string, without a line terminator
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        let mut line = String::with_capacity(record.message().len() + 32);
        self.format_into(record, &mut line);
        line
    }

    /// Append the rendered line to `buf`
    pub fn format_into(&self, record: &LogRecord, buf: &mut String) {
        // Writing into a String cannot fail.
        let _ = write!(
            buf,
            "{} [{}] {}",
            record.timestamp().format(TIMESTAMP_FORMAT),
            record.level(),
            record.message()
        );
    }
}
