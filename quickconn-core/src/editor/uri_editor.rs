//! Reconciliation controller between the quick-connect string and the
//! structured fields.
//!
//! The editor owns the single mutable [`ConnectionDescriptor`] and routes
//! edits in one direction at a time:
//!
//! - quick-connect text → parser → descriptor → field texts. The text that
//!   triggered the change is left untouched.
//! - structured field → descriptor → formatter → quick-connect text.
//!
//! While it writes results back to the view the editor is
//! [`EditSource::Propagating`]; any edit reported in that state, including
//! the toolkit's echo of the editor's own write, is dropped. After every edit
//! settles the validator runs and the listener is notified according to the
//! [`NotifyPolicy`].

use super::bundle::{EditorBundle, keys};
use super::event::{EditSource, EditorEvent};
use super::listener::{NotifyPolicy, UriEditorListener};
use super::view::{EditorView, NullView};
use crate::error::EditorResult;
use crate::models::{
    ConnectionDescriptor, FieldKind, GrammarKind, HostRecord, StructuredFields, non_empty,
};
use crate::protocol::ProtocolRegistry;
use crate::quick_connect;
use crate::tracing::span_names;
use crate::{trace_operation, trace_operation_debug};

/// Work counters of a URI editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorStats {
    /// Quick-connect texts parsed for text edits
    pub parses: usize,
    /// Descriptors formatted for field edits
    pub formats: usize,
    /// Validator runs
    pub validations: usize,
    /// Notifications delivered to the listener
    pub notifications: usize,
    /// Edits dropped because they arrived while propagating
    pub ignored_events: usize,
}

/// Two-way editor for a connection descriptor
pub struct UriEditor<L, V = NullView> {
    registry: ProtocolRegistry,
    descriptor: ConnectionDescriptor,
    quick_connect_text: String,
    expanded: bool,
    edit_source: EditSource,
    policy: NotifyPolicy,
    last_notified: Option<bool>,
    valid: bool,
    stats: EditorStats,
    listener: L,
    view: V,
}

impl<L: UriEditorListener, V: EditorView> UriEditor<L, V> {
    /// Opens an editor for a new host with the registry's default protocol
    pub fn new(registry: ProtocolRegistry, listener: L, view: V) -> Self {
        let descriptor = ConnectionDescriptor::new(registry.default_protocol().clone());
        Self::for_descriptor(registry, descriptor, listener, view)
    }

    /// Opens an editor pre-filled with `descriptor`
    pub fn for_descriptor(
        registry: ProtocolRegistry,
        descriptor: ConnectionDescriptor,
        listener: L,
        view: V,
    ) -> Self {
        let mut editor = Self {
            registry,
            quick_connect_text: descriptor.quick_connect_string(),
            descriptor,
            expanded: false,
            edit_source: EditSource::Idle,
            policy: NotifyPolicy::default(),
            last_notified: None,
            valid: false,
            stats: EditorStats::default(),
            listener,
            view,
        };
        editor.valid = editor.check_validity();
        editor.render_all();
        editor
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
        let descriptor = host.descriptor(&registry)?;
        Ok(Self::for_descriptor(registry, descriptor, listener, view))
    }

    /// Opens an editor from an external URI such as `ssh://bob@host:2022`
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
        let descriptor = crate::uri::descriptor_from_uri(&registry, uri)?;
        Ok(Self::for_descriptor(registry, descriptor, listener, view))
    }

    /// Sets the notification policy
    #[must_use]
    pub fn with_policy(mut self, policy: NotifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Routes an input event to its handler
    ///
    /// # Errors
    ///
    /// Returns `EditorError::UnknownProtocol` for a protocol change to an
    /// unregistered id.
    pub fn handle(&mut self, event: EditorEvent) -> EditorResult<()> {
        match event {
            EditorEvent::ProtocolChanged(id) => self.on_protocol_changed(&id),
            EditorEvent::QuickConnectTextChanged(text) => {
                self.on_quick_connect_text_changed(&text);
                Ok(())
            }
            EditorEvent::FieldChanged { field, text } => {
                self.on_field_changed(field, &text);
                Ok(())
            }
        }
    }

    /// The user selected a different protocol
    ///
    /// Resets the port to the new default, clears fields the protocol does
    /// not use and empties the quick-connect text. For the local grammar the
    /// nickname goes with the text. The result is always invalid.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::UnknownProtocol` if `id` is not registered; the
    /// editor is left unchanged.
    pub fn on_protocol_changed(&mut self, id: &str) -> EditorResult<()> {
        if self.drop_if_propagating("protocol_changed") {
            return Ok(());
        }
        let protocol = self.registry.lookup(id)?.clone();
        let _span =
            trace_operation!(span_names::EDITOR_PROTOCOL_CHANGED, protocol = %protocol.id())
                .entered();

        self.descriptor.switch_protocol(protocol);
        self.quick_connect_text.clear();
        if self.descriptor.protocol.grammar() == GrammarKind::Nickname {
            // The nickname is the quick-connect text, which was just cleared.
            self.descriptor.fields.nickname = None;
        }
        if !self.descriptor.protocol.has_uri_parts() {
            self.expanded = false;
        }

        self.render_all();
        self.settle();
        Ok(())
    }

    /// The quick-connect text changed
    ///
    /// Text that does not parse clears the structured fields and resets the
    /// port; it never raises.
    pub fn on_quick_connect_text_changed(&mut self, raw: &str) {
        if self.drop_if_propagating("text_changed") {
            return;
        }
        let _span = trace_operation_debug!(
            span_names::EDITOR_TEXT_CHANGED,
            protocol = %self.descriptor.protocol.id()
        )
        .entered();

        self.quick_connect_text = raw.to_string();
        self.stats.parses += 1;
        if let Some(fields) = quick_connect::parse(&self.descriptor.protocol, raw) {
            self.descriptor.fields = fields;
        } else {
            tracing::debug!(
                protocol = %self.descriptor.protocol.id(),
                "Quick-connect text does not parse, clearing fields"
            );
            self.descriptor.fields = StructuredFields::for_protocol(&self.descriptor.protocol);
        }

        self.edit_source = EditSource::Propagating;
        self.push_fields();
        self.edit_source = EditSource::Idle;
        self.settle();
    }

    /// One structured field changed
    ///
    /// Port text that is not a number in 1..=65535 keeps the previous port.
    pub fn on_field_changed(&mut self, field: FieldKind, raw: &str) {
        if self.drop_if_propagating("field_changed") {
            return;
        }
        let _span = trace_operation_debug!(
            span_names::EDITOR_FIELD_CHANGED,
            protocol = %self.descriptor.protocol.id(),
            field = %field
        )
        .entered();

        let fields = &mut self.descriptor.fields;
        match field {
            FieldKind::Username => fields.username = non_empty(raw.to_string()),
            FieldKind::Hostname => fields.hostname = non_empty(raw.to_string()),
            FieldKind::Nickname => fields.nickname = non_empty(raw.to_string()),
            FieldKind::Port => match quick_connect::parse_port(raw.trim()) {
                Some(port) => fields.port = port,
                None => tracing::debug!(
                    text = raw,
                    port = fields.port,
                    "Port text is not a valid port, keeping previous port"
                ),
            },
        }

        self.edit_source = EditSource::Propagating;
        self.stats.formats += 1;
        self.quick_connect_text =
            quick_connect::format(&self.descriptor.protocol, &self.descriptor.fields);
        self.push_quick_connect_text();
        self.edit_source = EditSource::Idle;
        self.settle();
    }

    /// Replaces the descriptor with one built from an external URI
    ///
    /// # Errors
    ///
    /// Returns `EditorError::InvalidUri` if the URI cannot be used; the
    /// editor is left unchanged.
    pub fn load_uri(&mut self, uri: &str) -> EditorResult<()> {
        let descriptor = crate::uri::descriptor_from_uri(&self.registry, uri)?;
        self.descriptor = descriptor;
        self.quick_connect_text = self.descriptor.quick_connect_string();
        self.render_all();
        self.settle();
        Ok(())
    }

    /// Expands or collapses the URI-parts section
    ///
    /// Protocols without URI parts stay collapsed.
    pub fn set_expanded(&mut self, expanded: bool) {
        let expanded = expanded && self.descriptor.protocol.has_uri_parts();
        if expanded != self.expanded {
            self.expanded = expanded;
            self.view.set_expanded(expanded);
        }
    }

    /// Flips the URI-parts section
    pub fn toggle_expanded(&mut self) {
        self.set_expanded(!self.expanded);
    }

    /// Saves the editor state to a flat bundle
    #[must_use]
    pub fn serialize(&self) -> EditorBundle {
        let fields = &self.descriptor.fields;
        let mut bundle = EditorBundle::new();
        bundle.insert(keys::PROTOCOL, self.descriptor.protocol.id());
        bundle.insert_opt(keys::USERNAME, fields.username.as_deref());
        bundle.insert_opt(keys::HOSTNAME, fields.hostname.as_deref());
        bundle.insert(keys::PORT, fields.port.to_string());
        bundle.insert_opt(keys::NICKNAME, fields.nickname.as_deref());
        bundle.insert(keys::IS_EXPANDED, self.expanded.to_string());
        bundle
    }

    /// Restores state saved by [`Self::serialize`]
    ///
    /// A missing protocol means the default protocol; an unusable port means
    /// the protocol's default port.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::UnknownProtocol` for an unregistered protocol and
    /// `EditorError::Restore` for a malformed expansion flag. The editor is
    /// left unchanged on error.
    pub fn restore(&mut self, bundle: &EditorBundle) -> EditorResult<()> {
        let _span = trace_operation!(span_names::EDITOR_RESTORE, keys = bundle.len()).entered();

        let protocol = match bundle.get(keys::PROTOCOL) {
            Some(id) => self.registry.lookup(id)?.clone(),
            None => self.registry.default_protocol().clone(),
        };
        let expanded = bundle.get_bool(keys::IS_EXPANDED)?.unwrap_or(false);

        let mut fields = StructuredFields::for_protocol(&protocol);
        fields.username = bundle.get(keys::USERNAME).map(str::to_string).and_then(non_empty);
        fields.hostname = bundle.get(keys::HOSTNAME).map(str::to_string).and_then(non_empty);
        fields.nickname = bundle.get(keys::NICKNAME).map(str::to_string).and_then(non_empty);
        if let Some(text) = bundle.get(keys::PORT) {
            match quick_connect::parse_port(text) {
                Some(port) => fields.port = port,
                None => tracing::debug!(text, "Saved port is not usable, using protocol default"),
            }
        }

        self.descriptor = ConnectionDescriptor::with_fields(protocol, fields);
        self.quick_connect_text = self.descriptor.quick_connect_string();
        self.expanded = expanded && self.descriptor.protocol.has_uri_parts();
        self.render_all();
        self.settle();
        Ok(())
    }

    /// Current descriptor
    #[must_use]
    pub const fn descriptor(&self) -> &ConnectionDescriptor {
        &self.descriptor
    }

    /// Text currently shown in the quick-connect field
    #[must_use]
    pub fn quick_connect_text(&self) -> &str {
        &self.quick_connect_text
    }

    /// Validity computed at the last settle
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the URI-parts section is expanded
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Current state of the re-entrancy guard
    #[must_use]
    pub const fn edit_source(&self) -> EditSource {
        self.edit_source
    }

    /// Notification policy
    #[must_use]
    pub const fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    /// Work counters
    #[must_use]
    pub const fn stats(&self) -> EditorStats {
        self.stats
    }

    /// Protocol registry the editor resolves ids with
    #[must_use]
    pub const fn registry(&self) -> &ProtocolRegistry {
        &self.registry
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

    /// View
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Mutable view
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consumes the editor, returning its listener and view
    pub fn into_parts(self) -> (L, V) {
        (self.listener, self.view)
    }

    fn drop_if_propagating(&mut self, event: &'static str) -> bool {
        if self.edit_source.is_propagating() {
            self.stats.ignored_events += 1;
            tracing::trace!(event, state = %self.edit_source, "Ignoring edit while propagating");
            true
        } else {
            false
        }
    }

    fn check_validity(&self) -> bool {
        quick_connect::is_valid(
            &self.descriptor.protocol,
            &self.descriptor.fields,
            &self.quick_connect_text,
        )
    }

    /// Runs the validator and notifies the listener
    fn settle(&mut self) {
        self.stats.validations += 1;
        let valid = self.check_validity();
        self.valid = valid;

        let notify = match self.policy {
            NotifyPolicy::EverySettle => true,
            NotifyPolicy::TransitionsOnly => self.last_notified != Some(valid),
        };
        tracing::debug!(
            protocol = %self.descriptor.protocol.id(),
            valid,
            notify,
            "Editor settled"
        );
        if !notify {
            return;
        }

        self.last_notified = Some(valid);
        self.stats.notifications += 1;
        if valid {
            self.listener.on_valid_uri_entered(&self.descriptor);
        } else {
            self.listener.on_invalid_uri_entered();
        }
    }

    /// Pushes layout, field texts and quick-connect text to the view
    fn render_all(&mut self) {
        self.edit_source = EditSource::Propagating;
        let protocol = &self.descriptor.protocol;
        self.view
            .set_quick_connect_hint(quick_connect::format_hint(protocol));
        for field in FieldKind::ALL {
            self.view
                .set_field_visible(field, protocol.fields_shown().contains(&field));
        }
        self.view.set_expanded(self.expanded);
        self.push_fields();
        self.push_quick_connect_text();
        self.edit_source = EditSource::Idle;
    }

    fn push_fields(&mut self) {
        let echoes: Vec<EditorEvent> = self
            .descriptor
            .protocol
            .relevant_fields()
            .iter()
            .filter_map(|&field| {
                let text = self.descriptor.fields.display_text(field);
                self.view.set_field_text(field, &text)
            })
            .collect();
        for echo in echoes {
            self.route_echo(echo);
        }
    }

    fn push_quick_connect_text(&mut self) {
        if let Some(echo) = self.view.set_quick_connect_text(&self.quick_connect_text) {
            self.route_echo(echo);
        }
    }

    fn route_echo(&mut self, echo: EditorEvent) {
        debug_assert!(self.edit_source.is_propagating());
        if let Err(err) = self.handle(echo) {
            tracing::warn!(error = %err, "Echoed view event failed");
        }
    }
}

impl<L: std::fmt::Debug, V> std::fmt::Debug for UriEditor<L, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UriEditor")
            .field("descriptor", &self.descriptor)
            .field("quick_connect_text", &self.quick_connect_text)
            .field("expanded", &self.expanded)
            .field("edit_source", &self.edit_source)
            .field("valid", &self.valid)
            .field("listener", &self.listener)
            .finish_non_exhaustive()
    }
}
