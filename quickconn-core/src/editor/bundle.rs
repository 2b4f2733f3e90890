//! Flat key/value bundles used to suspend and resume editors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::error::{EditorError, EditorResult};

/// Bundle keys
pub mod keys {
    /// Protocol id
    pub const PROTOCOL: &str = "protocol";
    /// Username
    pub const USERNAME: &str = "username";
    /// Hostname
    pub const HOSTNAME: &str = "hostname";
    /// Port
    pub const PORT: &str = "port";
    /// Nickname
    pub const NICKNAME: &str = "nickname";
    /// Whether the URI-parts section is expanded
    pub const IS_EXPANDED: &str = "is_expanded";
    /// Host colour (display editor)
    pub const COLOR: &str = "color";
    /// Font size (display editor)
    pub const FONT_SIZE: &str = "fontsize";
}

/// Flat string map holding an editor's state across suspend/resume
///
/// Unset optional values are absent rather than empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorBundle(BTreeMap<String, String>);

impl EditorBundle {
    /// Creates an empty bundle
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Stores a value if present; removes the key otherwise
    pub fn insert_opt(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => self.insert(key, value),
            None => {
                self.0.remove(key);
            }
        }
    }

    /// Returns the value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the boolean stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Restore` if the value is neither `true` nor
    /// `false`.
    pub fn get_bool(&self, key: &str) -> EditorResult<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value.parse::<bool>().map(Some).map_err(|_| {
                EditorError::Restore(format!("{key} must be true or false, got {value:?}"))
            }),
        }
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Key/value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored values
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EditorBundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Saved state of a host editor: the host id and both sub-editor bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEditorBundle {
    /// Id of the host being edited
    pub id: Uuid,
    /// URI editor state
    pub uri: EditorBundle,
    /// Display editor state
    pub display: EditorBundle,
}
