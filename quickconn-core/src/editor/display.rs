//! Editor for the presentation settings of a host.

use super::bundle::{EditorBundle, keys};
use crate::error::{EditorError, EditorResult};
use crate::models::{DisplaySettings, HostColor, non_empty};

/// Receives the display settings after every change
pub trait DisplaySettingsListener {
    /// Called with the complete settings after each edit
    fn on_display_settings_changed(&mut self, settings: &DisplaySettings);
}

impl DisplaySettingsListener for Vec<DisplaySettings> {
    fn on_display_settings_changed(&mut self, settings: &DisplaySettings) {
        self.push(settings.clone());
    }
}

/// Nickname, colour and font-size editor
#[derive(Debug, Clone)]
pub struct DisplayEditor<L> {
    settings: DisplaySettings,
    listener: L,
}

impl<L: DisplaySettingsListener> DisplayEditor<L> {
    /// Opens an editor with default settings
    pub fn new(listener: L) -> Self {
        Self::for_settings(DisplaySettings::default(), listener)
    }

    /// Opens an editor pre-filled with `settings`
    pub const fn for_settings(settings: DisplaySettings, listener: L) -> Self {
        Self { settings, listener }
    }

    /// The nickname text changed
    pub fn on_nickname_changed(&mut self, text: &str) {
        self.settings.nickname = non_empty(text.to_string());
        self.notify();
    }

    /// A colour was selected
    pub fn on_color_selected(&mut self, color: HostColor) {
        self.settings.color = color;
        self.notify();
    }

    /// The font-size text changed
    ///
    /// Text that is not a positive number keeps the previous size.
    pub fn on_font_size_changed(&mut self, text: &str) {
        match text.trim().parse::<u16>() {
            Ok(size) if size > 0 => self.settings.font_size = size,
            Ok(_) | Err(_) => tracing::debug!(
                text,
                font_size = self.settings.font_size,
                "Font size is not a positive number, keeping previous size"
            ),
        }
        self.notify();
    }

    /// Current settings
    #[must_use]
    pub const fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Text shown in the font-size field
    #[must_use]
    pub fn font_size_text(&self) -> String {
        self.settings.effective_font_size().to_string()
    }

    /// Saves the settings to a flat bundle
    #[must_use]
    pub fn serialize(&self) -> EditorBundle {
        let mut bundle = EditorBundle::new();
        bundle.insert_opt(keys::NICKNAME, self.settings.nickname.as_deref());
        bundle.insert(keys::COLOR, self.settings.color.as_str());
        bundle.insert(keys::FONT_SIZE, self.font_size_text());
        bundle
    }

    /// Restores settings saved by [`Self::serialize`]
    ///
    /// A missing or non-numeric font size restores the default size.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Restore` for an unknown colour; the editor is
    /// left unchanged.
    pub fn restore(&mut self, bundle: &EditorBundle) -> EditorResult<()> {
        self.settings = Self::settings_from_bundle(bundle)?;
        self.notify();
        Ok(())
    }

    /// Reads the settings a bundle describes without applying them
    pub(crate) fn settings_from_bundle(bundle: &EditorBundle) -> EditorResult<DisplaySettings> {
        let color = match bundle.get(keys::COLOR) {
            Some(value) => value.parse::<HostColor>().map_err(EditorError::Restore)?,
            None => HostColor::default(),
        };
        let defaults = DisplaySettings::default();
        let font_size = bundle
            .get(keys::FONT_SIZE)
            .and_then(|text| text.parse::<u16>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(defaults.font_size);

        Ok(DisplaySettings {
            nickname: bundle.get(keys::NICKNAME).map(str::to_string).and_then(non_empty),
            color,
            font_size,
        })
    }

    /// Replaces the settings and notifies
    pub(crate) fn apply(&mut self, settings: DisplaySettings) {
        self.settings = settings;
        self.notify();
    }

    /// Listener
    #[must_use]
    pub const fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable listener
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    fn notify(&mut self) {
        self.listener.on_display_settings_changed(&self.settings);
    }
}
