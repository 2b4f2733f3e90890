//! Saved editor states command.

use std::path::Path;

use serde::Serialize;

use quickconn_core::editor::keys;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{format_json, format_table};
use crate::util::create_config_manager;

#[derive(Debug, Serialize)]
struct StateOutput {
    name: String,
    saved_at: String,
    protocol: String,
}

/// States command handler
pub fn cmd_states(
    config_path: Option<&Path>,
    delete: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let manager = create_config_manager(config_path)?;

    if let Some(name) = delete {
        manager.delete_state(name)?;
        println!("Deleted state '{name}'");
        return Ok(());
    }

    let mut states = Vec::new();
    for name in manager.list_states()? {
        match manager.load_state(&name) {
            Ok(state) => states.push(StateOutput {
                protocol: state.editor.uri.get(keys::PROTOCOL).unwrap_or("-").to_string(),
                saved_at: state.saved_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                name,
            }),
            Err(err) => tracing::warn!(state = %name, error = %err, "Skipping unreadable state"),
        }
    }

    match format {
        OutputFormat::Json => println!("{}", format_json(&states)?),
        OutputFormat::Table if states.is_empty() => println!("No saved states."),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = states
                .iter()
                .map(|s| vec![s.name.clone(), s.saved_at.clone(), s.protocol.clone()])
                .collect();
            println!("{}", format_table(&["NAME", "SAVED AT", "PROTOCOL"], &rows));
        }
    }
    Ok(())
}
