//! `QuickConn` Core Library
//!
//! Two-way editing of connection descriptors: a free-form quick-connect
//! string such as `user@host:2222` and the structured fields it stands for are
//! kept in agreement as the user edits either side.
//!
//! # Crate Structure
//!
//! - [`models`] - Protocol specs, connection descriptors, host records
//! - [`protocol`] - Registry of supported protocols (ssh, telnet, local)
//! - [`quick_connect`] - Parser, formatter and validator per grammar
//! - [`uri`] - External `scheme://` URIs to and from descriptors
//! - [`editor`] - Reconciliation controller, display and host editors
//! - [`config`] - Settings and saved editor states
//! - [`tracing`] - Structured logging setup

#![warn(missing_docs)]

pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod protocol;
pub mod quick_connect;
pub mod tracing;
pub mod uri;

pub use config::{ConfigManager, EditorSettings, SavedEditorState};
pub use editor::{
    DisplayEditor, EditSource, EditorBundle, EditorEvent, EditorView, HostEditor, HostListener,
    NotifyPolicy, NullView, UriEditor, UriEditorListener,
};
pub use error::{ConfigError, ConfigResult, EditorError, EditorResult, QuickConnError};
pub use models::{
    ConnectionDescriptor, DisplaySettings, FieldKind, GrammarKind, HostColor, HostRecord,
    ProtocolSpec, StructuredFields,
};
pub use protocol::ProtocolRegistry;
pub use tracing::{TracingConfig, TracingError, TracingLevel, TracingOutput, init_tracing};
pub use uri::{descriptor_from_uri, descriptor_to_uri};
