//! Connection descriptors and their structured fields.

use serde::{Deserialize, Serialize};

use super::protocol::{FieldKind, ProtocolSpec};

/// Decomposed, editable parts of a quick-connect string
///
/// Empty strings are stored as `None`: an empty username and a missing one
/// are the same thing to the formatter and validator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredFields {
    /// Login name
    pub username: Option<String>,
    /// Host name or address, without IPv6 brackets
    pub hostname: Option<String>,
    /// TCP port
    pub port: u16,
    /// Local session name
    pub nickname: Option<String>,
}

impl StructuredFields {
    /// Creates empty fields with the protocol's default port
    #[must_use]
    pub fn for_protocol(protocol: &ProtocolSpec) -> Self {
        Self {
            port: protocol.default_port(),
            ..Self::default()
        }
    }

    /// Sets the username
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = non_empty(username.into());
        self
    }

    /// Sets the hostname
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = non_empty(hostname.into());
        self
    }

    /// Sets the port
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the nickname
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = non_empty(nickname.into());
        self
    }

    /// Text a view shows for `field`
    #[must_use]
    pub fn display_text(&self, field: FieldKind) -> String {
        match field {
            FieldKind::Username => self.username.clone().unwrap_or_default(),
            FieldKind::Hostname => self.hostname.clone().unwrap_or_default(),
            FieldKind::Port => self.port.to_string(),
            FieldKind::Nickname => self.nickname.clone().unwrap_or_default(),
        }
    }

    /// Compares only the fields that carry meaning for `protocol`
    #[must_use]
    pub fn relevant_eq(&self, other: &Self, protocol: &ProtocolSpec) -> bool {
        protocol.relevant_fields().iter().all(|field| match field {
            FieldKind::Username => self.username == other.username,
            FieldKind::Hostname => self.hostname == other.hostname,
            FieldKind::Port => self.port == other.port,
            FieldKind::Nickname => self.nickname == other.nickname,
        })
    }

    /// Clears every field that is not relevant for `protocol` and resets the
    /// port to its default
    pub fn reset_for(&mut self, protocol: &ProtocolSpec) {
        if !protocol.is_relevant(FieldKind::Username) {
            self.username = None;
        }
        if !protocol.is_relevant(FieldKind::Hostname) {
            self.hostname = None;
        }
        if !protocol.is_relevant(FieldKind::Nickname) {
            self.nickname = None;
        }
        self.port = protocol.default_port();
    }
}

/// Protocol plus structured fields: the single source of truth the editor
/// reconciles against the displayed quick-connect string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    /// Protocol the fields are interpreted with
    pub protocol: ProtocolSpec,
    /// Structured field values
    pub fields: StructuredFields,
}

impl ConnectionDescriptor {
    /// Creates an empty descriptor with the protocol's defaults
    #[must_use]
    pub fn new(protocol: ProtocolSpec) -> Self {
        let fields = StructuredFields::for_protocol(&protocol);
        Self { protocol, fields }
    }

    /// Creates a descriptor from already-known fields
    #[must_use]
    pub const fn with_fields(protocol: ProtocolSpec, fields: StructuredFields) -> Self {
        Self { protocol, fields }
    }

    /// Switches protocol, clearing irrelevant fields and defaulting the port
    pub fn switch_protocol(&mut self, protocol: ProtocolSpec) {
        self.fields.reset_for(&protocol);
        self.protocol = protocol;
    }

    /// Username, if set
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.fields.username.as_deref()
    }

    /// Hostname, if set
    #[must_use]
    pub fn hostname(&self) -> Option<&str> {
        self.fields.hostname.as_deref()
    }

    /// Port
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.fields.port
    }

    /// Nickname, if set
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.fields.nickname.as_deref()
    }

    /// Renders the canonical quick-connect string
    #[must_use]
    pub fn quick_connect_string(&self) -> String {
        crate::quick_connect::format(&self.protocol, &self.fields)
    }
}

/// Maps an empty string to `None`
#[must_use]
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
