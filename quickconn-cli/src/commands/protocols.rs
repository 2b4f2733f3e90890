//! List protocols command.

use serde::Serialize;

use quickconn_core::config::EditorSettings;
use quickconn_core::models::GrammarKind;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{format_json, format_table};

#[derive(Debug, Serialize)]
struct ProtocolOutput<'a> {
    id: &'a str,
    name: &'a str,
    default_port: u16,
    grammar: GrammarKind,
    format: &'static str,
    default: bool,
}

/// Protocols command handler
pub fn cmd_protocols(settings: &EditorSettings, format: OutputFormat) -> Result<(), CliError> {
    let registry = settings.registry()?;
    let default_id = registry.default_protocol().id();
    let protocols: Vec<ProtocolOutput<'_>> = registry
        .protocols()
        .iter()
        .map(|spec| ProtocolOutput {
            id: spec.id(),
            name: spec.display_name(),
            default_port: spec.default_port(),
            grammar: spec.grammar(),
            format: spec.grammar().format_hint(),
            default: spec.id() == default_id,
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", format_json(&protocols)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = protocols
                .iter()
                .map(|p| {
                    let marker = if p.default { " *" } else { "" };
                    let port = if p.grammar.uses_port() {
                        p.default_port.to_string()
                    } else {
                        "-".to_string()
                    };
                    vec![format!("{}{marker}", p.id), p.name.to_string(), port, p.format.to_string()]
                })
                .collect();
            println!("{}", format_table(&["ID", "NAME", "PORT", "FORMAT"], &rows));
        }
    }
    Ok(())
}
