//! Named editor states saved between runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::editor::HostEditorBundle;

/// Current version of the saved state format
pub const SAVED_STATE_VERSION: u32 = 1;

/// A suspended host editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEditorState {
    /// Format version
    pub version: u32,
    /// When the state was saved
    pub saved_at: DateTime<Utc>,
    /// Host id and both sub-editor bundles
    pub editor: HostEditorBundle,
}

impl SavedEditorState {
    /// Wraps an editor bundle, stamped with the current time
    #[must_use]
    pub fn new(editor: HostEditorBundle) -> Self {
        Self {
            version: SAVED_STATE_VERSION,
            saved_at: Utc::now(),
            editor,
        }
    }

    /// Updates the `saved_at` timestamp
    pub fn touch(&mut self) {
        self.saved_at = Utc::now();
    }
}
