//! Host records produced by the host editor, and their display settings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::descriptor::{ConnectionDescriptor, StructuredFields};
use crate::error::EditorResult;
use crate::protocol::ProtocolRegistry;

/// Font size used when a host has none configured
pub const DEFAULT_FONT_SIZE: u16 = 10;

/// Colour tag shown next to a host in host lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostColor {
    /// Gray (default)
    #[default]
    Gray,
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

impl HostColor {
    /// All colours in selector order
    pub const ALL: [Self; 4] = [Self::Gray, Self::Red, Self::Green, Self::Blue];

    /// Returns the stored value of this colour
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl std::fmt::Display for HostColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HostColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown color: {s}"))
    }
}

/// Presentation settings of a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Name shown in host lists
    pub nickname: Option<String>,
    /// Colour tag
    pub color: HostColor,
    /// Terminal font size in points
    pub font_size: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            nickname: None,
            color: HostColor::default(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl DisplaySettings {
    /// Font size to show; a zero size falls back to the default
    #[must_use]
    pub const fn effective_font_size(&self) -> u16 {
        if self.font_size == 0 {
            DEFAULT_FONT_SIZE
        } else {
            self.font_size
        }
    }
}

/// A complete host as handed to the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    /// Stable identifier
    pub id: Uuid,
    /// Name shown in host lists
    pub nickname: String,
    /// Protocol identifier
    pub protocol: String,
    /// Login name
    pub username: Option<String>,
    /// Host name or address
    pub hostname: Option<String>,
    /// TCP port
    pub port: u16,
    /// Colour tag
    pub color: HostColor,
    /// Terminal font size in points
    pub font_size: u16,
}

impl HostRecord {
    /// Combines a descriptor and display settings into a record
    ///
    /// The nickname is the display nickname if set, else the local session
    /// name, else the quick-connect string.
    #[must_use]
    pub fn from_parts(id: Uuid, descriptor: &ConnectionDescriptor, display: &DisplaySettings) -> Self {
        let nickname = display
            .nickname
            .clone()
            .or_else(|| descriptor.fields.nickname.clone())
            .unwrap_or_else(|| descriptor.quick_connect_string());

        Self {
            id,
            nickname,
            protocol: descriptor.protocol.id().to_string(),
            username: descriptor.fields.username.clone(),
            hostname: descriptor.fields.hostname.clone(),
            port: descriptor.fields.port,
            color: display.color,
            font_size: display.effective_font_size(),
        }
    }

    /// Rebuilds the connection descriptor of this record
    ///
    /// # Errors
    ///
    /// Returns `EditorError::UnknownProtocol` if the record's protocol is not
    /// registered.
    pub fn descriptor(&self, registry: &ProtocolRegistry) -> EditorResult<ConnectionDescriptor> {
        let protocol = registry.lookup(&self.protocol)?.clone();
        let mut fields = StructuredFields::for_protocol(&protocol).with_port(self.port);
        fields.username.clone_from(&self.username);
        fields.hostname.clone_from(&self.hostname);
        if !protocol.has_uri_parts() {
            fields.nickname = Some(self.nickname.clone());
        }
        Ok(ConnectionDescriptor::with_fields(protocol, fields))
    }

    /// Display settings of this record
    #[must_use]
    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            nickname: Some(self.nickname.clone()),
            color: self.color,
            font_size: self.font_size,
        }
    }
}
