//! Error types for Ebook Studio.
//!
//! Library crates use [`StudioError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Message surfaced when an assembly failure carries no usable text.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Something went sideways in the agent pipeline.";

/// Top-level error type for all Ebook Studio operations.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// A pipeline stage failed while composing its part of the ebook.
    #[error("{message}")]
    Assembly { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input validation error (bad brief file, unknown tone, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// JSON or TOML serialization error.
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, StudioError>;

impl StudioError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create an assembly failure. Blank messages fall back to a generic one.
    pub fn assembly(msg: impl Into<String>) -> Self {
        let message = msg.into();
        let message = if message.trim().is_empty() {
            FALLBACK_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        Self::Assembly { message }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = StudioError::config("missing home directory");
        assert_eq!(err.to_string(), "config error: missing home directory");

        let err = StudioError::validation("unknown tone 'loud'");
        assert!(err.to_string().contains("unknown tone"));
    }

    #[test]
    fn assembly_error_displays_bare_message() {
        let err = StudioError::assembly("topic is required");
        assert_eq!(err.to_string(), "topic is required");
    }

    #[test]
    fn blank_assembly_message_uses_fallback() {
        let err = StudioError::assembly("   ");
        assert_eq!(err.to_string(), FALLBACK_FAILURE_MESSAGE);
    }
}
