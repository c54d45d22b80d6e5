//! Error types for the logger

use std::io;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Writing a line to the destination failed
    #[error("failed to write log line to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Flushing the destination failed
    #[error("failed to flush {target}: {source}")]
    Flush {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// JSON configuration could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `init` was called more than once
    #[error("global logger already initialized")]
    AlreadyInitialized,
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a write error for the named destination
    pub fn write(target: impl Into<String>, source: io::Error) -> Self {
        LoggerError::Write {
            target: target.into(),
            source,
        }
    }

    /// Create a flush error for the named destination
    pub fn flush(target: impl Into<String>, source: io::Error) -> Self {
        LoggerError::Flush {
            target: target.into(),
            source,
        }
    }

    /// The underlying I/O error kind, if this is a stream failure
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            LoggerError::Write { source, .. } | LoggerError::Flush { source, .. } => {
                Some(source.kind())
            }
            _ => None,
        }
    }
}
