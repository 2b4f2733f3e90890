//! Property tests for editor suspend/resume
//!
//! - a serialized editor restores to the same descriptor, text and expansion
//! - bundles survive a TOML round trip unchanged

use proptest::prelude::*;
use quickconn_core::editor::{
    EditorBundle, EditorEvent, HostEditor, HostEditorBundle, HostListener, NotificationLog,
    NullView, UriEditor,
};
use quickconn_core::models::{FieldKind, HostColor, HostRecord};
use quickconn_core::protocol::ProtocolRegistry;

use super::{arb_hostname, arb_nickname, arb_port, arb_username};

#[derive(Debug, Default)]
struct Ignore;

impl HostListener for Ignore {
    fn on_host_updated(&mut self, _host: &HostRecord) {}
}

fn arb_color() -> impl Strategy<Value = HostColor> {
    prop::sample::select(HostColor::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn uri_editor_restores(
        protocol in prop_oneof![Just("ssh"), Just("telnet"), Just("local")],
        username in arb_username(),
        hostname in arb_hostname(),
        port in arb_port(),
        nickname in arb_nickname(),
        expanded in any::<bool>(),
    ) {
        let mut editor = UriEditor::new(ProtocolRegistry::new(), NotificationLog::new(), NullView);
        editor.on_protocol_changed(protocol).unwrap();
        editor.on_field_changed(FieldKind::Username, &username);
        editor.on_field_changed(FieldKind::Hostname, &hostname);
        editor.on_field_changed(FieldKind::Port, &port.to_string());
        editor.on_field_changed(FieldKind::Nickname, &nickname);
        editor.set_expanded(expanded);

        let bundle = editor.serialize();
        let mut restored = UriEditor::new(ProtocolRegistry::new(), NotificationLog::new(), NullView);
        restored.restore(&bundle).unwrap();

        prop_assert_eq!(restored.descriptor(), editor.descriptor());
        prop_assert_eq!(restored.quick_connect_text(), editor.quick_connect_text());
        prop_assert_eq!(restored.is_expanded(), editor.is_expanded());
        prop_assert_eq!(restored.is_valid(), editor.is_valid());
        prop_assert_eq!(restored.listener().len(), 1);
    }

    #[test]
    fn host_bundle_survives_toml(
        username in arb_username(),
        hostname in arb_hostname(),
        port in arb_port(),
        nickname in arb_nickname(),
        color in arb_color(),
        font_size in 1u16..72,
    ) {
        let mut editor = HostEditor::new(ProtocolRegistry::new(), Ignore, NullView);
        editor.handle(EditorEvent::FieldChanged { field: FieldKind::Username, text: username }).unwrap();
        editor.handle(EditorEvent::FieldChanged { field: FieldKind::Hostname, text: hostname }).unwrap();
        editor.handle(EditorEvent::FieldChanged { field: FieldKind::Port, text: port.to_string() }).unwrap();
        editor.on_nickname_changed(&nickname);
        editor.on_color_selected(color);
        editor.on_font_size_changed(&font_size.to_string());

        let bundle = editor.serialize();
        let text = toml::to_string(&bundle).unwrap();
        let parsed: HostEditorBundle = toml::from_str(&text).unwrap();
        prop_assert_eq!(&parsed, &bundle);

        let mut restored = HostEditor::new(ProtocolRegistry::new(), Ignore, NullView);
        restored.restore(&parsed).unwrap();
        prop_assert_eq!(restored.host_record(), editor.host_record());
    }

    #[test]
    fn missing_keys_restore_defaults(keys in prop::sample::subsequence(vec!["username", "hostname", "nickname"], 0..=3)) {
        let bundle: EditorBundle = keys.iter().map(|key| (*key, "x")).collect();
        let mut editor = UriEditor::new(ProtocolRegistry::new(), NotificationLog::new(), NullView);
        editor.restore(&bundle).unwrap();
        prop_assert_eq!(editor.descriptor().protocol.id(), "ssh");
        prop_assert_eq!(editor.descriptor().port(), 22);
        prop_assert!(!editor.is_expanded());
    }
}
