//! Property tests for the reconciliation controller
//!
//! - an edit is processed exactly once even when the view echoes every write
//! - text edits never rewrite the text that triggered them
//! - field edits leave text and fields in agreement
//! - protocol switches reset the port and produce an invalid descriptor
//! - every settled edit produces exactly one notification

use std::collections::HashMap;

use proptest::prelude::*;
use quickconn_core::editor::{
    EditSource, EditorEvent, EditorView, NotificationLog, NotifyPolicy, UriEditor,
    UriNotification,
};
use quickconn_core::models::FieldKind;
use quickconn_core::protocol::ProtocolRegistry;
use quickconn_core::quick_connect;

use super::{arb_hostname, arb_nickname, arb_port, arb_username};

/// View that reports every programmatic write back as an edit
#[derive(Debug, Default)]
struct EchoingView {
    text: String,
    fields: HashMap<FieldKind, String>,
}

impl EditorView for EchoingView {
    fn set_quick_connect_text(&mut self, text: &str) -> Option<EditorEvent> {
        self.text = text.to_string();
        Some(EditorEvent::QuickConnectTextChanged(text.to_string()))
    }

    fn set_field_text(&mut self, field: FieldKind, text: &str) -> Option<EditorEvent> {
        self.fields.insert(field, text.to_string());
        Some(EditorEvent::FieldChanged {
            field,
            text: text.to_string(),
        })
    }
}

fn editor() -> UriEditor<NotificationLog, EchoingView> {
    UriEditor::new(
        ProtocolRegistry::new(),
        NotificationLog::new(),
        EchoingView::default(),
    )
}

/// Strategy for arbitrary user input events on the built-in protocols
fn arb_event() -> impl Strategy<Value = EditorEvent> {
    prop_oneof![
        prop_oneof![Just("ssh"), Just("telnet"), Just("local")]
            .prop_map(|id| EditorEvent::ProtocolChanged(id.to_string())),
        "[a-z@:.\\[\\] 0-9]{0,24}".prop_map(EditorEvent::QuickConnectTextChanged),
        (
            prop_oneof![
                Just(FieldKind::Username),
                Just(FieldKind::Hostname),
                Just(FieldKind::Port),
                Just(FieldKind::Nickname),
            ],
            "[a-z0-9.]{0,12}",
        )
            .prop_map(|(field, text)| EditorEvent::FieldChanged { field, text }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn each_edit_is_processed_once(events in prop::collection::vec(arb_event(), 1..30)) {
        let mut editor = editor();
        for event in events {
            let before = editor.stats();
            let kind = event.kind();
            editor.handle(event).expect("built-in protocols only");
            let after = editor.stats();

            prop_assert_eq!(editor.edit_source(), EditSource::Idle);
            prop_assert_eq!(after.validations - before.validations, 1);
            prop_assert_eq!(after.notifications - before.notifications, 1);
            match kind {
                "text_changed" => {
                    prop_assert_eq!(after.parses - before.parses, 1);
                    prop_assert_eq!(after.formats, before.formats);
                }
                "field_changed" => {
                    prop_assert_eq!(after.formats - before.formats, 1);
                    prop_assert_eq!(after.parses, before.parses);
                }
                _ => {
                    prop_assert_eq!(after.parses, before.parses);
                    prop_assert_eq!(after.formats, before.formats);
                }
            }
        }
        prop_assert_eq!(editor.listener().len(), editor.stats().notifications);
    }

    #[test]
    fn text_edit_keeps_typed_text(text in "[a-z@:.0-9]{0,24}") {
        let mut editor = editor();
        editor.on_quick_connect_text_changed(&text);
        prop_assert_eq!(editor.quick_connect_text(), text.as_str());
    }

    #[test]
    fn field_edits_keep_text_and_fields_in_agreement(
        username in arb_username(),
        hostname in arb_hostname(),
        port in arb_port(),
    ) {
        let mut editor = editor();
        editor.on_field_changed(FieldKind::Username, &username);
        editor.on_field_changed(FieldKind::Hostname, &hostname);
        editor.on_field_changed(FieldKind::Port, &port.to_string());

        let descriptor = editor.descriptor().clone();
        let text = editor.quick_connect_text().to_string();
        prop_assert_eq!(&editor.view().text, &text);
        let parsed = quick_connect::parse(&descriptor.protocol, &text).expect("formatted text parses");
        prop_assert!(parsed.relevant_eq(&descriptor.fields, &descriptor.protocol));
        prop_assert!(editor.is_valid());
        prop_assert!(editor.listener().last_was_valid());
    }

    #[test]
    fn protocol_switch_resets(
        username in arb_username(),
        hostname in arb_hostname(),
        port in arb_port(),
        nickname in arb_nickname(),
        start in prop_oneof![Just("ssh"), Just("local")],
        target in prop_oneof![Just("ssh"), Just("telnet"), Just("local")],
    ) {
        let mut editor = editor();
        editor.on_protocol_changed(start).expect("built-in protocol");
        editor.on_field_changed(FieldKind::Username, &username);
        editor.on_field_changed(FieldKind::Hostname, &hostname);
        editor.on_field_changed(FieldKind::Port, &port.to_string());
        editor.on_field_changed(FieldKind::Nickname, &nickname);
        editor.on_protocol_changed(target).expect("built-in protocol");

        let descriptor = editor.descriptor();
        prop_assert_eq!(descriptor.port(), descriptor.protocol.default_port());
        prop_assert_eq!(editor.quick_connect_text(), "");
        if descriptor.protocol.id() == "local" {
            prop_assert_eq!(descriptor.nickname(), None);
        }
        prop_assert!(!editor.is_valid());
        prop_assert_eq!(editor.listener().last(), Some(&UriNotification::Invalid));
        if descriptor.protocol.is_relevant(FieldKind::Port) {
            let port_text = descriptor.port().to_string();
            prop_assert_eq!(
                editor.view().fields.get(&FieldKind::Port).map(String::as_str),
                Some(port_text.as_str())
            );
        }
    }

    #[test]
    fn transitions_only_never_repeats(events in prop::collection::vec(arb_event(), 1..30)) {
        let mut editor = editor().with_policy(NotifyPolicy::TransitionsOnly);
        for event in events {
            editor.handle(event).expect("built-in protocols only");
        }
        let entries = editor.listener().entries();
        for pair in entries.windows(2) {
            let first_valid = matches!(pair[0], UriNotification::Valid(_));
            let second_valid = matches!(pair[1], UriNotification::Valid(_));
            prop_assert_ne!(first_valid, second_valid);
        }
    }
}
