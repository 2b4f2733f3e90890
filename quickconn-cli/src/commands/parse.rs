//! Parse quick-connect text command.

use quickconn_core::config::EditorSettings;
use quickconn_core::models::{ConnectionDescriptor, StructuredFields};
use quickconn_core::quick_connect;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{DescriptorOutput, format_json, format_properties};

/// Parse command handler
///
/// Text that does not parse prints the reset descriptor and exits with the
/// invalid-descriptor code.
pub fn cmd_parse(
    settings: &EditorSettings,
    protocol: Option<&str>,
    text: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let registry = settings.registry()?;
    let spec = match protocol {
        Some(id) => registry.lookup(id)?,
        None => registry.default_protocol(),
    };

    let fields = quick_connect::parse(spec, text).unwrap_or_else(|| {
        tracing::debug!(protocol = %spec.id(), "Quick-connect text does not parse");
        StructuredFields::for_protocol(spec)
    });
    let valid = quick_connect::is_valid(spec, &fields, text);
    let descriptor = ConnectionDescriptor::with_fields(spec.clone(), fields);
    let output = DescriptorOutput::new(&descriptor, text, valid);

    match format {
        OutputFormat::Json => println!("{}", format_json(&output)?),
        OutputFormat::Table => println!("{}", format_properties(&output.properties())),
    }

    if valid {
        Ok(())
    } else {
        Err(CliError::InvalidDescriptor(format!(
            "{text:?} is not a complete {} address ({})",
            spec.display_name(),
            quick_connect::format_hint(spec)
        )))
    }
}
