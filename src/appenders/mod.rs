//! Appender implementations

pub mod console;

pub use console::ConsoleAppender;

pub use crate::core::Appender;
