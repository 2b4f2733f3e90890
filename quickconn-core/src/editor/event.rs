//! Input events delivered by the presentation layer.

use crate::models::FieldKind;

/// An edit reported by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A different protocol was selected
    ProtocolChanged(String),
    /// The quick-connect text changed
    QuickConnectTextChanged(String),
    /// One structured field changed
    FieldChanged {
        /// Field that changed
        field: FieldKind,
        /// New text of the field
        text: String,
    },
}

impl EditorEvent {
    /// Short name used in log fields
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ProtocolChanged(_) => "protocol_changed",
            Self::QuickConnectTextChanged(_) => "text_changed",
            Self::FieldChanged { .. } => "field_changed",
        }
    }
}

/// Re-entrancy guard of the URI editor
///
/// While the editor writes computed values back to the view it is
/// `Propagating`; edits reported in that state are echoes of its own writes
/// and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSource {
    /// Waiting for user edits
    #[default]
    Idle,
    /// Writing computed values back to the view
    Propagating,
}

impl EditSource {
    /// Returns true while write-back is in progress
    #[must_use]
    pub const fn is_propagating(self) -> bool {
        matches!(self, Self::Propagating)
    }
}

impl std::fmt::Display for EditSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Propagating => write!(f, "propagating"),
        }
    }
}
