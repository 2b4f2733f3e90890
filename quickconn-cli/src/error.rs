//! CLI error types and exit codes.

use quickconn_core::error::{ConfigError, EditorError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, I/O, unknown protocol or bad input
    pub const GENERAL_ERROR: i32 = 1;
    /// The descriptor is incomplete or its quick-connect text does not parse
    pub const INVALID_DESCRIPTOR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Saved state not found
    #[error("Saved state not found: {0}")]
    StateNotFound(String),

    /// Editor or protocol error
    #[error("{0}")]
    Editor(#[from] EditorError),

    /// Descriptor did not validate
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// Output serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound(name) => Self::StateNotFound(name),
            other => Self::Config(other.to_string()),
        }
    }
}

impl CliError {
    /// Returns the exit code for this error
    ///
    /// - 1: general error
    /// - 2: invalid descriptor
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDescriptor(_) => exit_codes::INVALID_DESCRIPTOR,
            Self::Config(_)
            | Self::StateNotFound(_)
            | Self::Editor(_)
            | Self::Serialization(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
