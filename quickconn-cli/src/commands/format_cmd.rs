//! Render structured fields command.

use quickconn_core::config::EditorSettings;
use quickconn_core::models::{ConnectionDescriptor, StructuredFields, non_empty};
use quickconn_core::quick_connect;
use quickconn_core::uri::descriptor_to_uri;

use crate::error::CliError;

/// Parameters for the format command
pub struct FormatParams<'a> {
    pub protocol: Option<&'a str>,
    pub user: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub nickname: Option<String>,
    pub uri: bool,
}

/// Format command handler
pub fn cmd_format(settings: &EditorSettings, params: &FormatParams<'_>) -> Result<(), CliError> {
    let registry = settings.registry()?;
    let spec = match params.protocol {
        Some(id) => registry.lookup(id)?,
        None => registry.default_protocol(),
    };

    let mut fields = StructuredFields::for_protocol(spec);
    fields.username = params.user.clone().and_then(non_empty);
    fields.hostname = params.host.clone().and_then(non_empty);
    fields.nickname = params.nickname.clone().and_then(non_empty);
    if let Some(port) = params.port.filter(|port| *port != 0) {
        fields.port = port;
    }

    let text = quick_connect::format(spec, &fields);
    if text.is_empty() {
        return Err(CliError::InvalidDescriptor(format!(
            "missing fields for {} ({})",
            spec.display_name(),
            quick_connect::format_hint(spec)
        )));
    }

    if params.uri {
        let descriptor = ConnectionDescriptor::with_fields(spec.clone(), fields);
        println!("{}", descriptor_to_uri(&descriptor));
    } else {
        println!("{text}");
    }
    Ok(())
}
