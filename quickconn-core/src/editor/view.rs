//! Presentation sink the URI editor writes computed values to.

use super::event::EditorEvent;
use crate::models::FieldKind;

/// Widgets driven by the URI editor
///
/// Text setters return the change event the toolkit fires for a programmatic
/// write, if it fires one. The editor routes that event back through its
/// normal entry point while it is still propagating, where it is dropped.
pub trait EditorView {
    /// Replaces the quick-connect text
    fn set_quick_connect_text(&mut self, text: &str) -> Option<EditorEvent>;

    /// Replaces the text of one structured field
    fn set_field_text(&mut self, field: FieldKind, text: &str) -> Option<EditorEvent>;

    /// Shows or hides one structured field
    fn set_field_visible(&mut self, _field: FieldKind, _visible: bool) {}

    /// Sets the quick-connect placeholder
    fn set_quick_connect_hint(&mut self, _hint: &str) {}

    /// Expands or collapses the URI-parts section
    fn set_expanded(&mut self, _expanded: bool) {}
}

/// View that ignores every write, for headless use
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl EditorView for NullView {
    fn set_quick_connect_text(&mut self, _text: &str) -> Option<EditorEvent> {
        None
    }

    fn set_field_text(&mut self, _field: FieldKind, _text: &str) -> Option<EditorEvent> {
        None
    }
}
