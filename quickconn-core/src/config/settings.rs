//! Editor settings stored in `settings.toml`.

use serde::{Deserialize, Serialize};

use crate::editor::NotifyPolicy;
use crate::error::EditorResult;
use crate::models::DEFAULT_FONT_SIZE;
use crate::protocol::ProtocolRegistry;

/// User settings for new editors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Protocol selected for new hosts
    pub default_protocol: String,
    /// When the URI editor notifies its listener
    pub notify_policy: NotifyPolicy,
    /// Font size for new hosts
    pub default_font_size: u16,
    /// Log level used when no `RUST_LOG` is set
    pub log_level: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_protocol: "ssh".to_string(),
            notify_policy: NotifyPolicy::default(),
            default_font_size: DEFAULT_FONT_SIZE,
            log_level: "info".to_string(),
        }
    }
}

impl EditorSettings {
    /// Builds the built-in registry with the configured default protocol
    ///
    /// # Errors
    ///
    /// Returns `EditorError::UnknownProtocol` if `default_protocol` is not a
    /// built-in protocol.
    pub fn registry(&self) -> EditorResult<ProtocolRegistry> {
        let mut registry = ProtocolRegistry::new();
        registry.set_default(&self.default_protocol)?;
        Ok(registry)
    }
}
