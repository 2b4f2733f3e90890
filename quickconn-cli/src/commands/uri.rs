//! Read an external URI command.

use quickconn_core::config::EditorSettings;
use quickconn_core::uri::descriptor_from_uri;
use quickconn_core::quick_connect;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{DescriptorOutput, format_json, format_properties};

/// URI command handler
pub fn cmd_uri(settings: &EditorSettings, uri: &str, format: OutputFormat) -> Result<(), CliError> {
    let registry = settings.registry()?;
    let descriptor = descriptor_from_uri(&registry, uri)?;
    let text = descriptor.quick_connect_string();
    let valid = quick_connect::is_valid(&descriptor.protocol, &descriptor.fields, &text);
    let output = DescriptorOutput::new(&descriptor, &text, valid);

    match format {
        OutputFormat::Json => println!("{}", format_json(&output)?),
        OutputFormat::Table => println!("{}", format_properties(&output.properties())),
    }

    if valid {
        Ok(())
    } else {
        Err(CliError::InvalidDescriptor(uri.to_string()))
    }
}
