//! Editing sessions driven through the public event API

use quickconn_core::editor::{
    EditorEvent, HostEditor, HostListener, NotificationLog, NullView, UriEditor, UriNotification,
};
use quickconn_core::models::{FieldKind, HostColor, HostRecord};
use quickconn_core::protocol::ProtocolRegistry;
use quickconn_core::{EditorError, ProtocolSpec};

fn uri_editor() -> UriEditor<NotificationLog> {
    UriEditor::new(ProtocolRegistry::new(), NotificationLog::new(), NullView)
}

fn text(raw: &str) -> EditorEvent {
    EditorEvent::QuickConnectTextChanged(raw.to_string())
}

fn field(field: FieldKind, raw: &str) -> EditorEvent {
    EditorEvent::FieldChanged {
        field,
        text: raw.to_string(),
    }
}

#[test]
fn ssh_text_without_port() {
    let mut editor = uri_editor();
    editor.handle(text("bob@example.com")).unwrap();

    let descriptor = editor.descriptor();
    assert_eq!(descriptor.username(), Some("bob"));
    assert_eq!(descriptor.hostname(), Some("example.com"));
    assert_eq!(descriptor.port(), 22);
    assert!(editor.is_valid());
    assert!(matches!(
        editor.listener().last(),
        Some(UriNotification::Valid(d)) if d.hostname() == Some("example.com")
    ));
}

#[test]
fn ssh_port_field_rewrites_text() {
    let mut editor = uri_editor();
    editor.handle(text("bob@example.com")).unwrap();
    editor.handle(field(FieldKind::Port, "2022")).unwrap();

    assert_eq!(editor.quick_connect_text(), "bob@example.com:2022");
    assert!(editor.is_valid());
    assert!(editor.listener().last_was_valid());
}

#[test]
fn switching_to_telnet_resets() {
    let mut editor = uri_editor();
    editor.handle(text("bob@example.com:2022")).unwrap();
    editor
        .handle(EditorEvent::ProtocolChanged("telnet".to_string()))
        .unwrap();

    assert_eq!(editor.descriptor().port(), 23);
    assert_eq!(editor.quick_connect_text(), "");
    assert!(!editor.is_valid());
    assert_eq!(editor.listener().last(), Some(&UriNotification::Invalid));
}

#[test]
fn local_nickname_field() {
    let mut editor = uri_editor();
    editor
        .handle(EditorEvent::ProtocolChanged("local".to_string()))
        .unwrap();
    editor
        .handle(field(FieldKind::Nickname, "home-server"))
        .unwrap();

    assert_eq!(editor.quick_connect_text(), "home-server");
    assert!(editor.is_valid());
}

#[test]
fn garbage_text_clears_fields() {
    let mut editor = uri_editor();
    editor.handle(text("bob@example.com:2022")).unwrap();
    editor.handle(text("garbage spaces no at sign")).unwrap();

    let descriptor = editor.descriptor();
    assert_eq!(descriptor.username(), None);
    assert_eq!(descriptor.hostname(), None);
    assert_eq!(descriptor.port(), 22);
    assert_eq!(editor.quick_connect_text(), "garbage spaces no at sign");
    assert!(!editor.is_valid());
}

#[test]
fn unknown_protocol_is_an_error() {
    let mut editor = uri_editor();
    let err = editor
        .handle(EditorEvent::ProtocolChanged("rdp".to_string()))
        .unwrap_err();
    assert_eq!(err, EditorError::UnknownProtocol("rdp".to_string()));
}

#[test]
fn custom_protocol_uses_its_grammar() {
    let mut registry = ProtocolRegistry::new();
    registry
        .register(ProtocolSpec::new(
            "mosh",
            "Mosh",
            22,
            quickconn_core::GrammarKind::UserHostPort,
        ))
        .unwrap();
    let mut editor = UriEditor::new(registry, NotificationLog::new(), NullView);
    editor
        .handle(EditorEvent::ProtocolChanged("MOSH".to_string()))
        .unwrap();
    editor.handle(text("ops@bastion:60001")).unwrap();
    assert_eq!(editor.descriptor().protocol.id(), "mosh");
    assert_eq!(editor.descriptor().port(), 60001);
    assert!(editor.is_valid());
}

#[derive(Debug, Default)]
struct Saved {
    hosts: Vec<HostRecord>,
    invalid: usize,
}

impl HostListener for Saved {
    fn on_host_updated(&mut self, host: &HostRecord) {
        self.hosts.push(host.clone());
    }

    fn on_host_invalid(&mut self) {
        self.invalid += 1;
    }
}

#[test]
fn host_editor_session() {
    let mut editor = HostEditor::new(ProtocolRegistry::new(), Saved::default(), NullView);
    editor.handle(text("b")).unwrap();
    editor.handle(text("bob@db")).unwrap();
    editor.handle(field(FieldKind::Port, "5022")).unwrap();
    editor.on_nickname_changed("Database");
    editor.on_color_selected(HostColor::Blue);
    editor.on_font_size_changed("not a number");

    let saved = editor.into_listener();
    assert_eq!(saved.invalid, 1);
    assert_eq!(saved.hosts.len(), 5);
    let host = saved.hosts.last().unwrap();
    assert_eq!(host.nickname, "Database");
    assert_eq!(host.username.as_deref(), Some("bob"));
    assert_eq!(host.port, 5022);
    assert_eq!(host.color, HostColor::Blue);
    assert_eq!(host.font_size, 10);
}

#[test]
fn host_editor_from_uri() {
    let editor = HostEditor::from_uri(
        ProtocolRegistry::new(),
        "ssh://root@10.0.0.5:2200/#gateway",
        Saved::default(),
        NullView,
    )
    .unwrap();
    let host = editor.host_record().unwrap();
    assert_eq!(host.nickname, "gateway");
    assert_eq!(editor.descriptor().nickname(), Some("gateway"));
    assert_eq!(host.port, 2200);
}
