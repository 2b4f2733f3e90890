//! Configuration management for `QuickConn`
//!
//! [`ConfigManager`] loads and saves [`EditorSettings`] and named
//! [`SavedEditorState`]s as TOML files under the user configuration
//! directory.

mod manager;
mod settings;
mod state;

pub use manager::ConfigManager;
pub use settings::EditorSettings;
pub use state::{SAVED_STATE_VERSION, SavedEditorState};
