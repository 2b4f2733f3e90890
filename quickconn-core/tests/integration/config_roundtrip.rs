//! Settings and saved editor states through a temporary config directory

use quickconn_core::config::{ConfigManager, EditorSettings, SAVED_STATE_VERSION, SavedEditorState};
use quickconn_core::editor::{EditorEvent, HostEditor, HostListener, NotifyPolicy, NullView};
use quickconn_core::error::ConfigError;
use quickconn_core::models::{HostColor, HostRecord};
use tempfile::TempDir;

#[derive(Debug, Default)]
struct Latest(Option<HostRecord>);

impl HostListener for Latest {
    fn on_host_updated(&mut self, host: &HostRecord) {
        self.0 = Some(host.clone());
    }

    fn on_host_invalid(&mut self) {
        self.0 = None;
    }
}

fn manager() -> (ConfigManager, TempDir) {
    let dir = TempDir::new().unwrap();
    (ConfigManager::with_config_dir(dir.path().to_path_buf()), dir)
}

#[test]
fn missing_settings_are_defaults() {
    let (manager, _dir) = manager();
    assert_eq!(manager.load_settings().unwrap(), EditorSettings::default());
}

#[test]
fn settings_roundtrip() {
    let (manager, _dir) = manager();
    let settings = EditorSettings {
        default_protocol: "telnet".to_string(),
        notify_policy: NotifyPolicy::TransitionsOnly,
        default_font_size: 14,
        log_level: "debug".to_string(),
    };
    manager.save_settings(&settings).unwrap();
    assert!(manager.settings_path().exists());
    assert_eq!(manager.load_settings().unwrap(), settings);

    let content = std::fs::read_to_string(manager.settings_path()).unwrap();
    assert!(content.contains("notify_policy = \"transitions_only\""));
}

#[test]
fn malformed_settings_report_path() {
    let (manager, _dir) = manager();
    std::fs::create_dir_all(manager.config_dir()).unwrap();
    std::fs::write(manager.settings_path(), "default_font_size = \"big\"").unwrap();
    match manager.load_settings() {
        Err(ConfigError::Parse { path, .. }) => assert_eq!(path, manager.settings_path()),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn editor_state_suspend_and_resume() {
    let (manager, _dir) = manager();
    let settings = manager.load_settings().unwrap();

    let mut editor = HostEditor::new(settings.registry().unwrap(), Latest::default(), NullView);
    editor
        .handle(EditorEvent::QuickConnectTextChanged("deploy@ci.example.org:2222".into()))
        .unwrap();
    editor.on_color_selected(HostColor::Green);
    editor.set_expanded(true);
    let expected = editor.host_record().unwrap();

    manager
        .save_state("ci", &SavedEditorState::new(editor.serialize()))
        .unwrap();
    assert_eq!(manager.list_states().unwrap(), vec!["ci".to_string()]);

    let state = manager.load_state("ci").unwrap();
    assert_eq!(state.version, SAVED_STATE_VERSION);

    let mut resumed = HostEditor::new(settings.registry().unwrap(), Latest::default(), NullView);
    resumed.restore(&state.editor).unwrap();
    assert_eq!(resumed.listener().0.as_ref(), Some(&expected));
    assert_eq!(resumed.quick_connect_text(), "deploy@ci.example.org:2222");
    assert!(resumed.is_expanded());
}

#[test]
fn list_and_delete_states() {
    let (manager, _dir) = manager();
    assert!(manager.list_states().unwrap().is_empty());

    let editor = HostEditor::new(
        quickconn_core::ProtocolRegistry::new(),
        Latest::default(),
        NullView,
    );
    let state = SavedEditorState::new(editor.serialize());
    manager.save_state("b", &state).unwrap();
    manager.save_state("a", &state).unwrap();
    std::fs::write(manager.config_dir().join("states").join("notes.txt"), "x").unwrap();

    assert_eq!(manager.list_states().unwrap(), vec!["a", "b"]);
    manager.delete_state("a").unwrap();
    assert_eq!(manager.list_states().unwrap(), vec!["b"]);
    assert!(matches!(
        manager.delete_state("a"),
        Err(ConfigError::NotFound(name)) if name == "a"
    ));
    assert!(matches!(
        manager.load_state("missing"),
        Err(ConfigError::NotFound(_))
    ));
    assert!(matches!(
        manager.save_state("../escape", &state),
        Err(ConfigError::InvalidName(_))
    ));
}
