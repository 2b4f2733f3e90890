//! File-backed configuration store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{EditorSettings, SavedEditorState};
use crate::error::{ConfigError, ConfigResult};
use crate::trace_operation;
use crate::tracing::span_names;

const SETTINGS_FILE: &str = "settings.toml";
const STATES_DIR: &str = "states";
const STATE_EXTENSION: &str = "toml";

/// Loads and saves settings and saved editor states
///
/// Layout of the configuration directory:
///
/// ```text
/// <config_dir>/settings.toml
/// <config_dir>/states/<name>.toml
/// ```
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Uses `quickconn` under the platform configuration directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has none.
    pub fn new() -> ConfigResult<Self> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join("quickconn")))
    }

    /// Uses `config_dir` as the configuration directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Path of a named saved state
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidName` if `name` is empty or contains
    /// characters other than letters, digits, `-`, `_` and `.`.
    pub fn state_path(&self, name: &str) -> ConfigResult<PathBuf> {
        validate_name(name)?;
        Ok(self
            .config_dir
            .join(STATES_DIR)
            .join(format!("{name}.{STATE_EXTENSION}")))
    }

    /// Loads the settings; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> ConfigResult<EditorSettings> {
        let path = self.settings_path();
        let _span = trace_operation!(span_names::CONFIG_LOAD, path = %path.display()).entered();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(EditorSettings::default());
        }
        read_toml(&path)
    }

    /// Saves the settings
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_settings(&self, settings: &EditorSettings) -> ConfigResult<()> {
        let path = self.settings_path();
        let _span = trace_operation!(span_names::CONFIG_SAVE, path = %path.display()).entered();
        write_toml(&path, settings)
    }

    /// Saves an editor state under `name`, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid name or if the file cannot be written.
    pub fn save_state(&self, name: &str, state: &SavedEditorState) -> ConfigResult<()> {
        let path = self.state_path(name)?;
        let _span = trace_operation!(span_names::CONFIG_SAVE, state = name).entered();
        write_toml(&path, state)?;
        tracing::info!(state = name, "Saved editor state");
        Ok(())
    }

    /// Loads the editor state saved under `name`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no such state exists, or an error if
    /// it cannot be read or parsed.
    pub fn load_state(&self, name: &str) -> ConfigResult<SavedEditorState> {
        let path = self.state_path(name)?;
        let _span = trace_operation!(span_names::CONFIG_LOAD, state = name).entered();
        if !path.exists() {
            return Err(ConfigError::NotFound(name.to_string()));
        }
        read_toml(&path)
    }

    /// Names of all saved states, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the states directory exists but cannot be read.
    pub fn list_states(&self) -> ConfigResult<Vec<String>> {
        let dir = self.config_dir.join(STATES_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&dir).map_err(|source| ConfigError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == STATE_EXTENSION))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Deletes the state saved under `name`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no such state exists.
    pub fn delete_state(&self, name: &str) -> ConfigResult<()> {
        let path = self.state_path(name)?;
        if !path.exists() {
            return Err(ConfigError::NotFound(name.to_string()));
        }
        fs::remove_file(&path).map_err(|source| ConfigError::Io { path, source })?;
        tracing::info!(state = name, "Deleted editor state");
        Ok(())
    }
}

fn validate_name(name: &str) -> ConfigResult<()> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidName(name.to_string()))
    }
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> ConfigResult<T> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn write_toml<T: Serialize>(path: &Path, value: &T) -> ConfigResult<()> {
    let content = toml::to_string_pretty(value).map_err(|err| ConfigError::Serialize(err.to_string()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
