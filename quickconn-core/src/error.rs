//! Error types for `QuickConn`
//!
//! Free-form user text never produces an error value: an unparseable
//! quick-connect string is an incomplete descriptor, and non-numeric port text
//! keeps the previous port. The errors here describe contract violations by
//! collaborators (unknown protocol ids, malformed bundles or URIs) and
//! configuration I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the protocol registry and the editors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// A protocol id that is not registered
    #[error("Unknown protocol: {0}")]
    UnknownProtocol(String),

    /// A protocol id registered twice
    #[error("Protocol already registered: {0}")]
    DuplicateProtocol(String),

    /// An external URI that cannot be turned into a descriptor
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// A saved bundle that cannot be restored
    #[error("Cannot restore editor state: {0}")]
    Restore(String),
}

/// Errors raised while loading or saving configuration and editor state
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing a file failed
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A TOML file could not be deserialized
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A value could not be serialized to TOML or JSON
    #[error("Failed to serialize: {0}")]
    Serialize(String),

    /// A named saved state does not exist
    #[error("Saved state not found: {0}")]
    NotFound(String),

    /// A state name that cannot be used as a file name
    #[error("Invalid state name: {0:?}")]
    InvalidName(String),

    /// The platform has no configuration directory
    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}

/// Umbrella error for callers that use both the editor and configuration layers
#[derive(Debug, Error)]
pub enum QuickConnError {
    /// Editor error
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for editor and registry operations
pub type EditorResult<T> = Result<T, EditorError>;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
