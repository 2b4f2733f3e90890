//! Shared utility functions used across command modules.

use std::path::Path;

use quickconn_core::config::{ConfigManager, EditorSettings};
use quickconn_core::editor::EditorEvent;
use quickconn_core::models::{FieldKind, HostColor};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads settings from the config directory
pub fn load_settings(config_path: Option<&Path>) -> Result<EditorSettings, CliError> {
    Ok(create_config_manager(config_path)?.load_settings()?)
}

/// Parse a key=value pair
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=value: no `=` found in `{s}`"))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// One step replayed by the `edit` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
    /// Protocol, quick-connect text or structured field edit
    Connection(EditorEvent),
    /// Display name edit
    DisplayName(String),
    /// Colour selection
    Color(HostColor),
    /// Font-size text edit
    FontSize(String),
    /// Expand (`true`) or collapse the URI-parts section
    Expand(bool),
}

/// Parses `expand`, `collapse` or a `key=value` edit
pub fn parse_edit_step(s: &str) -> Result<EditStep, String> {
    match s {
        "expand" => return Ok(EditStep::Expand(true)),
        "collapse" => return Ok(EditStep::Expand(false)),
        _ => {}
    }

    let (key, value) = parse_key_val(s)?;
    let step = match key.as_str() {
        "protocol" => EditStep::Connection(EditorEvent::ProtocolChanged(value)),
        "text" => EditStep::Connection(EditorEvent::QuickConnectTextChanged(value)),
        "name" => EditStep::DisplayName(value),
        "color" => EditStep::Color(value.parse()?),
        "fontsize" => EditStep::FontSize(value),
        other => EditStep::Connection(EditorEvent::FieldChanged {
            field: other.parse::<FieldKind>()?,
            text: value,
        }),
    };
    Ok(step)
}
