//! Command handler modules for the CLI.

mod completions;
mod edit;
mod format_cmd;
mod parse;
mod protocols;
mod states;
mod uri;

use std::path::Path;

use quickconn_core::config::EditorSettings;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(
    config_path: Option<&Path>,
    settings: &EditorSettings,
    command: Commands,
) -> Result<(), CliError> {
    match command {
        Commands::Protocols { format } => protocols::cmd_protocols(settings, format),
        Commands::Parse {
            protocol,
            text,
            format,
        } => parse::cmd_parse(settings, protocol.as_deref(), &text, format),
        Commands::Format {
            protocol,
            user,
            host,
            port,
            nickname,
            uri,
        } => format_cmd::cmd_format(
            settings,
            &format_cmd::FormatParams {
                protocol: protocol.as_deref(),
                user,
                host,
                port,
                nickname,
                uri,
            },
        ),
        Commands::Uri { uri, format } => uri::cmd_uri(settings, &uri, format),
        Commands::Edit {
            protocol,
            resume,
            save,
            format,
            events,
        } => edit::cmd_edit(
            config_path,
            settings,
            &edit::EditParams {
                protocol: protocol.as_deref(),
                resume: resume.as_deref(),
                save: save.as_deref(),
                format,
                steps: &events,
            },
        ),
        Commands::States { delete, format } => {
            states::cmd_states(config_path, delete.as_deref(), format)
        }
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
