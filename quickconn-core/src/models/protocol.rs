//! Protocol descriptions: grammar kind, structured fields and the immutable
//! per-protocol spec held by the registry.

use serde::{Deserialize, Serialize};

/// Quick-connect grammar family of a protocol
///
/// The set is closed: every registered protocol parses and formats its
/// quick-connect string with one of these three rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarKind {
    /// `[username "@"] hostname [":" port]` (ssh-like)
    UserHostPort,
    /// `hostname [":" port]` (telnet-like)
    HostPort,
    /// The whole string is a session nickname (local-like)
    Nickname,
}

impl GrammarKind {
    /// Structured fields the URI-parts section shows for this grammar
    #[must_use]
    pub const fn fields_shown(self) -> &'static [FieldKind] {
        match self {
            Self::UserHostPort => &[FieldKind::Username, FieldKind::Hostname, FieldKind::Port],
            Self::HostPort => &[FieldKind::Hostname, FieldKind::Port],
            Self::Nickname => &[],
        }
    }

    /// Structured fields that carry meaning for this grammar
    ///
    /// Same as [`Self::fields_shown`] except that the local-like grammar keeps
    /// its nickname.
    #[must_use]
    pub const fn relevant_fields(self) -> &'static [FieldKind] {
        match self {
            Self::Nickname => &[FieldKind::Nickname],
            other => other.fields_shown(),
        }
    }

    /// Returns true if the port is part of this grammar
    #[must_use]
    pub const fn uses_port(self) -> bool {
        matches!(self, Self::UserHostPort | Self::HostPort)
    }

    /// Placeholder shown in an empty quick-connect field
    #[must_use]
    pub const fn format_hint(self) -> &'static str {
        match self {
            Self::UserHostPort => "username@hostname:port",
            Self::HostPort => "hostname:port",
            Self::Nickname => "nickname",
        }
    }
}

/// One of the editable structured fields of a connection descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Login name
    Username,
    /// Host name or address
    Hostname,
    /// TCP port
    Port,
    /// Local session name
    Nickname,
}

impl FieldKind {
    /// All fields in display order
    pub const ALL: [Self; 4] = [Self::Username, Self::Hostname, Self::Port, Self::Nickname];

    /// Returns the field name used in bundles and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Hostname => "hostname",
            Self::Port => "port",
            Self::Nickname => "nickname",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "username" | "user" => Ok(Self::Username),
            "hostname" | "host" => Ok(Self::Hostname),
            "port" => Ok(Self::Port),
            "nickname" | "nick" => Ok(Self::Nickname),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// Immutable description of one supported protocol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProtocolSpec {
    id: String,
    display_name: String,
    default_port: u16,
    grammar: GrammarKind,
}

impl ProtocolSpec {
    /// Creates a protocol spec
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        default_port: u16,
        grammar: GrammarKind,
    ) -> Self {
        Self {
            id: id.into().to_lowercase(),
            display_name: display_name.into(),
            default_port,
            grammar,
        }
    }

    /// The built-in SSH protocol
    #[must_use]
    pub fn ssh() -> Self {
        Self::new("ssh", "SSH", 22, GrammarKind::UserHostPort)
    }

    /// The built-in Telnet protocol
    #[must_use]
    pub fn telnet() -> Self {
        Self::new("telnet", "Telnet", 23, GrammarKind::HostPort)
    }

    /// The built-in local shell session
    #[must_use]
    pub fn local() -> Self {
        Self::new("local", "Local", 0, GrammarKind::Nickname)
    }

    /// Returns the protocol identifier (e.g. "ssh")
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable protocol name
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the port used when none is given
    #[must_use]
    pub const fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Returns the quick-connect grammar of this protocol
    #[must_use]
    pub const fn grammar(&self) -> GrammarKind {
        self.grammar
    }

    /// Structured fields shown in the URI-parts section
    #[must_use]
    pub const fn fields_shown(&self) -> &'static [FieldKind] {
        self.grammar.fields_shown()
    }

    /// Structured fields that are meaningful for this protocol
    #[must_use]
    pub const fn relevant_fields(&self) -> &'static [FieldKind] {
        self.grammar.relevant_fields()
    }

    /// Returns true if `field` is meaningful for this protocol
    #[must_use]
    pub fn is_relevant(&self, field: FieldKind) -> bool {
        self.relevant_fields().contains(&field)
    }

    /// Returns true if the protocol has a URI-parts section at all
    #[must_use]
    pub const fn has_uri_parts(&self) -> bool {
        !self.fields_shown().is_empty()
    }
}

impl std::fmt::Display for ProtocolSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name)
    }
}
