//! Host editors
//!
//! [`UriEditor`] keeps the quick-connect string and the structured fields of a
//! [`ConnectionDescriptor`](crate::models::ConnectionDescriptor) in agreement.
//! The presentation layer feeds it [`EditorEvent`]s and receives computed
//! values through an [`EditorView`]; validity is reported to a
//! [`UriEditorListener`].
//!
//! [`DisplayEditor`] edits the nickname, colour and font size of a host, and
//! [`HostEditor`] combines both into [`HostRecord`](crate::models::HostRecord)
//! updates.
//!
//! ```
//! use quickconn_core::editor::{NotificationLog, NullView, UriEditor};
//! use quickconn_core::protocol::ProtocolRegistry;
//!
//! let mut editor = UriEditor::new(ProtocolRegistry::new(), NotificationLog::new(), NullView);
//! editor.on_quick_connect_text_changed("bob@example.com:2022");
//! assert_eq!(editor.descriptor().port(), 2022);
//! assert!(editor.listener().last_was_valid());
//! ```

mod bundle;
mod display;
mod event;
mod host;
mod listener;
mod uri_editor;
mod view;

pub use bundle::{EditorBundle, HostEditorBundle, keys};
pub use display::{DisplayEditor, DisplaySettingsListener};
pub use event::{EditSource, EditorEvent};
pub use host::{HostEditor, HostListener};
pub use listener::{NotificationLog, NotifyPolicy, UriEditorListener, UriNotification};
pub use uri_editor::{EditorStats, UriEditor};
pub use view::{EditorView, NullView};
