use std::num::ParseIntError;

use thiserror::Error;

/// Unified error type for rose operations
#[derive(Error, Debug)]
pub enum RoseError {
    #[error("Versions must be in '<major>.<minor>.<patch>[-<release>]' format. Saw: {0}")]
    VersionFormat(String),

    #[error("Version component '{segment}' is not a number: {source}")]
    TypeConversion {
        segment: String,
        #[source]
        source: ParseIntError,
    },

    #[error("No command provided.")]
    MissingCommand,

    #[error("Command '{0}' can not be found.")]
    CommandNotFound(String),

    #[error("External command '{command}' failed: {reason}")]
    ExternalCommandFailed { command: String, reason: String },

    #[error("Flag error: {0}")]
    Flag(String),

    #[error("{0}")]
    ShowHelp(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in rose
pub type Result<T> = std::result::Result<T, RoseError>;

impl RoseError {
    /// Create a version format error from whatever was seen
    pub fn version_format(seen: impl Into<String>) -> Self {
        RoseError::VersionFormat(seen.into())
    }

    pub fn flag(msg: impl Into<String>) -> Self {
        RoseError::Flag(msg.into())
    }

    /// Ask the dispatcher to show the command's help with an extra message
    pub fn show_help(msg: impl Into<String>) -> Self {
        RoseError::ShowHelp(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        RoseError::Config(msg.into())
    }

    pub fn pattern(msg: impl Into<String>) -> Self {
        RoseError::Pattern(msg.into())
    }

    pub fn external(command: impl Into<String>, reason: impl Into<String>) -> Self {
        RoseError::ExternalCommandFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }
}
