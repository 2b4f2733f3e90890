//! Host editor: a URI editor and a display editor behind one listener.

use uuid::Uuid;

use super::bundle::HostEditorBundle;
use super::display::{DisplayEditor, DisplaySettingsListener};
use super::event::EditorEvent;
use super::listener::{NotifyPolicy, UriEditorListener};
use super::uri_editor::{EditorStats, UriEditor};
use super::view::{EditorView, NullView};
use crate::error::EditorResult;
use crate::models::{ConnectionDescriptor, DisplaySettings, HostColor, HostRecord};
use crate::protocol::ProtocolRegistry;

/// Receives the host record whenever either sub-editor changes
pub trait HostListener {
    /// The host is complete; `host` is ready to be saved
    fn on_host_updated(&mut self, host: &HostRecord);

    /// The connection part is incomplete or invalid
    fn on_host_invalid(&mut self) {}
}

/// Last validity reported by the inner URI editor
#[derive(Debug, Default)]
struct UriSignal(Option<bool>);

impl UriEditorListener for UriSignal {
    fn on_valid_uri_entered(&mut self, _descriptor: &ConnectionDescriptor) {
        self.0 = Some(true);
    }

    fn on_invalid_uri_entered(&mut self) {
        self.0 = Some(false);
    }
}

#[derive(Debug, Default)]
struct DisplaySignal(bool);

impl DisplaySettingsListener for DisplaySignal {
    fn on_display_settings_changed(&mut self, _settings: &DisplaySettings) {
        self.0 = true;
    }
}

/// Editor for a complete host
///
/// Every edit forwarded to either sub-editor ends with exactly one call to
/// the [`HostListener`]: `on_host_updated` while the connection part is
/// valid, `on_host_invalid` otherwise.
pub struct HostEditor<L, V = NullView> {
    id: Uuid,
    uri: UriEditor<UriSignal, V>,
    display: DisplayEditor<DisplaySignal>,
    listener: L,
}

impl<L: HostListener, V: EditorView> HostEditor<L, V> {
    /// Opens an editor for a new host
    pub fn new(registry: ProtocolRegistry, listener: L, view: V) -> Self {
        Self {
            id: Uuid::new_v4(),
            uri: UriEditor::new(registry, UriSignal::default(), view),
            display: DisplayEditor::new(DisplaySignal::default()),
            listener,
        }
    }

    /// Opens an editor for an existing host
    ///
    /// # Errors
    ///
    /// Returns `EditorError::UnknownProtocol` if the host's protocol is not
    /// registered.
    pub fn for_host(
        registry: ProtocolRegistry,
        host: &HostRecord,
        listener: L,
        view: V,
    ) -> EditorResult<Self> {
        Ok(Self {
            id: host.id,
            uri: UriEditor::for_host(registry, host, UriSignal::default(), view)?,
            display: DisplayEditor::for_settings(host.display_settings(), DisplaySignal::default()),
            listener,
        })
    }

    /// Opens an editor for a new host described by an external URI
    ///
    /// # Errors
    ///
    /// Returns `EditorError::InvalidUri` if the URI cannot be used.
    pub fn from_uri(
        registry: ProtocolRegistry,
        uri: &str,
        listener: L,
        view: V,
    ) -> EditorResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            uri: UriEditor::from_uri(registry, uri, UriSignal::default(), view)?,
            display: DisplayEditor::new(DisplaySignal::default()),
            listener,
        })
    }

    /// Sets the notification policy of the URI editor
    #[must_use]
    pub fn with_policy(mut self, policy: NotifyPolicy) -> Self {
        self.uri = self.uri.with_policy(policy);
        self
    }

    /// Replaces the initial display settings, without notifying
    #[must_use]
    pub fn with_display_settings(mut self, settings: DisplaySettings) -> Self {
        self.display = DisplayEditor::for_settings(settings, DisplaySignal::default());
        self
    }

    /// Forwards a connection edit to the URI editor
    ///
    /// # Errors
    ///
    /// Returns `EditorError::UnknownProtocol` for a protocol change to an
    /// unregistered id.
    pub fn handle(&mut self, event: EditorEvent) -> EditorResult<()> {
        self.uri.handle(event)?;
        self.publish();
        Ok(())
    }

    /// The display nickname changed
    pub fn on_nickname_changed(&mut self, text: &str) {
        self.display.on_nickname_changed(text);
        self.publish();
    }

    /// A colour was selected
    pub fn on_color_selected(&mut self, color: HostColor) {
        self.display.on_color_selected(color);
        self.publish();
    }

    /// The font-size text changed
    pub fn on_font_size_changed(&mut self, text: &str) {
        self.display.on_font_size_changed(text);
        self.publish();
    }

    /// Expands or collapses the URI-parts section
    pub fn set_expanded(&mut self, expanded: bool) {
        self.uri.set_expanded(expanded);
    }

    /// The host as it would be saved now, if the connection part is valid
    #[must_use]
    pub fn host_record(&self) -> Option<HostRecord> {
        self.uri.is_valid().then(|| {
            HostRecord::from_parts(self.id, self.uri.descriptor(), self.display.settings())
        })
    }

    /// Saves both sub-editors
    #[must_use]
    pub fn serialize(&self) -> HostEditorBundle {
        HostEditorBundle {
            id: self.id,
            uri: self.uri.serialize(),
            display: self.display.serialize(),
        }
    }

    /// Restores state saved by [`Self::serialize`]
    ///
    /// # Errors
    ///
    /// Returns the first sub-editor error. The editor is left unchanged on
    /// error.
    pub fn restore(&mut self, bundle: &HostEditorBundle) -> EditorResult<()> {
        let display = DisplayEditor::<DisplaySignal>::settings_from_bundle(&bundle.display)?;
        self.uri.restore(&bundle.uri)?;
        self.display.apply(display);
        self.id = bundle.id;
        self.publish();
        Ok(())
    }

    /// Id of the host being edited
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Current connection descriptor
    #[must_use]
    pub const fn descriptor(&self) -> &ConnectionDescriptor {
        self.uri.descriptor()
    }

    /// Text currently shown in the quick-connect field
    #[must_use]
    pub fn quick_connect_text(&self) -> &str {
        self.uri.quick_connect_text()
    }

    /// Whether the connection part is valid
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.uri.is_valid()
    }

    /// Whether the URI-parts section is expanded
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.uri.is_expanded()
    }

    /// Work counters of the URI editor
    #[must_use]
    pub const fn stats(&self) -> EditorStats {
        self.uri.stats()
    }

    /// View
    #[must_use]
    pub const fn view(&self) -> &V {
        self.uri.view()
    }

    /// Current display settings
    #[must_use]
    pub const fn display_settings(&self) -> &DisplaySettings {
        self.display.settings()
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

    /// Consumes the editor, returning its listener
    pub fn into_listener(self) -> L {
        self.listener
    }

    fn publish(&mut self) {
        let uri_changed = self.uri.listener_mut().0.take().is_some();
        let display_changed = std::mem::take(&mut self.display.listener_mut().0);
        if !uri_changed && !display_changed {
            return;
        }
        match self.host_record() {
            Some(host) => {
                tracing::debug!(id = %host.id, nickname = %host.nickname, "Host updated");
                self.listener.on_host_updated(&host);
            }
            None => self.listener.on_host_invalid(),
        }
    }
}
