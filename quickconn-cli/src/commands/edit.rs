//! Replay editor events command.

use std::path::Path;

use serde::Serialize;

use quickconn_core::config::{EditorSettings, SavedEditorState};
use quickconn_core::editor::{EditorEvent, HostEditor, HostListener, NullView};
use quickconn_core::models::{DisplaySettings, HostColor, HostRecord};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{DescriptorOutput, format_json, format_properties};
use crate::util::{EditStep, create_config_manager};

/// Parameters for the edit command
pub struct EditParams<'a> {
    pub protocol: Option<&'a str>,
    pub resume: Option<&'a str>,
    pub save: Option<&'a str>,
    pub format: OutputFormat,
    pub steps: &'a [EditStep],
}

/// One host-editor notification
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Notification {
    Updated { host: HostRecord },
    Invalid,
}

/// Records notifications for printing after the replay
#[derive(Debug, Default)]
struct Recorder {
    notifications: Vec<Notification>,
}

impl HostListener for Recorder {
    fn on_host_updated(&mut self, host: &HostRecord) {
        self.notifications
            .push(Notification::Updated { host: host.clone() });
    }

    fn on_host_invalid(&mut self) {
        self.notifications.push(Notification::Invalid);
    }
}

#[derive(Debug, Serialize)]
struct EditOutput {
    id: String,
    #[serde(flatten)]
    descriptor: DescriptorOutput,
    expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    color: HostColor,
    font_size: u16,
    notifications: Vec<Notification>,
}

/// Edit command handler
///
/// Exits with the invalid-descriptor code when the final state is not a
/// complete host; a requested save still happens first.
pub fn cmd_edit(
    config_path: Option<&Path>,
    settings: &EditorSettings,
    params: &EditParams<'_>,
) -> Result<(), CliError> {
    let registry = settings.registry()?;
    let display = DisplaySettings {
        font_size: settings.default_font_size,
        ..DisplaySettings::default()
    };
    let mut editor = HostEditor::new(registry, Recorder::default(), NullView)
        .with_policy(settings.notify_policy)
        .with_display_settings(display);

    if let Some(name) = params.resume {
        let state = create_config_manager(config_path)?.load_state(name)?;
        editor.restore(&state.editor)?;
        tracing::info!(state = name, saved_at = %state.saved_at, "Resumed editor state");
    }
    if let Some(id) = params.protocol {
        editor.handle(EditorEvent::ProtocolChanged(id.to_string()))?;
    }
    for step in params.steps {
        apply(&mut editor, step)?;
    }

    let valid = editor.is_valid();
    let settings_now = editor.display_settings().clone();
    let output = EditOutput {
        id: editor.id().to_string(),
        descriptor: DescriptorOutput::new(editor.descriptor(), editor.quick_connect_text(), valid),
        expanded: editor.is_expanded(),
        display_name: settings_now.nickname.clone(),
        color: settings_now.color,
        font_size: settings_now.effective_font_size(),
        notifications: std::mem::take(&mut editor.listener_mut().notifications),
    };
    print_output(&output, params.format)?;

    if let Some(name) = params.save {
        create_config_manager(config_path)?
            .save_state(name, &SavedEditorState::new(editor.serialize()))?;
        if params.format == OutputFormat::Table {
            println!("Saved state '{name}'");
        }
    }

    if valid {
        Ok(())
    } else {
        Err(CliError::InvalidDescriptor(format!(
            "{:?} is incomplete",
            editor.quick_connect_text()
        )))
    }
}

fn apply<L: HostListener>(editor: &mut HostEditor<L>, step: &EditStep) -> Result<(), CliError> {
    tracing::debug!(?step, "Replaying edit");
    match step {
        EditStep::Connection(event) => editor.handle(event.clone())?,
        EditStep::DisplayName(name) => editor.on_nickname_changed(name),
        EditStep::Color(color) => editor.on_color_selected(*color),
        EditStep::FontSize(text) => editor.on_font_size_changed(text),
        EditStep::Expand(expanded) => editor.set_expanded(*expanded),
    }
    Ok(())
}

fn print_output(output: &EditOutput, format: OutputFormat) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        println!("{}", format_json(output)?);
        return Ok(());
    }

    for (index, notification) in output.notifications.iter().enumerate() {
        match notification {
            Notification::Updated { host } => println!(
                "[{}] host updated: {} ({}, port {})",
                index + 1,
                host.nickname,
                host.protocol,
                host.port
            ),
            Notification::Invalid => println!("[{}] host invalid", index + 1),
        }
    }

    let mut properties = output.descriptor.properties();
    properties.push(("Expanded", if output.expanded { "yes" } else { "no" }.to_string()));
    properties.push((
        "Display name",
        output.display_name.clone().unwrap_or_else(|| "-".to_string()),
    ));
    properties.push(("Color", output.color.to_string()));
    properties.push(("Font size", output.font_size.to_string()));
    properties.push(("Id", output.id.clone()));
    println!("{}", format_properties(&properties));
    Ok(())
}
