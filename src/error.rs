//! Error types for the render pipeline

use std::io;

use thiserror::Error;

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering markup to an image
#[derive(Error, Debug)]
pub enum Error {
    /// No usable executable for an external tool was found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// An external tool could not be started
    #[error("Failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// An external tool ran but exited unsuccessfully
    #[error("{tool} failed (exit code: {code:?}): {stderr}")]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Filesystem error (temp dir, input file, config file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The pipeline finished a step without producing what the next step needs
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a `ToolFailed` from a finished process' status and stderr.
    pub(crate) fn tool_failed(tool: &str, status: std::process::ExitStatus, stderr: &[u8]) -> Self {
        Error::ToolFailed {
            tool: tool.to_string(),
            code: status.code(),
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }
}
