//! Output formatting shared by the commands.

use std::fmt::Write as _;

use serde::Serialize;

use quickconn_core::models::ConnectionDescriptor;
use quickconn_core::uri::descriptor_to_uri;

use crate::error::CliError;

/// Formats rows as a left-aligned table with a dashed header rule
#[must_use]
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column).map(String::len))
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let mut output = String::new();
    let header: Vec<String> = headers.iter().map(ToString::to_string).collect();
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    for row in std::iter::once(&header).chain(std::iter::once(&rule)).chain(rows) {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(output, "{}", line.trim_end());
    }

    output.trim_end().to_string()
}

/// Formats `key: value` lines with aligned values
#[must_use]
pub fn format_properties(properties: &[(&str, String)]) -> String {
    let width = properties.iter().map(|(key, _)| key.len()).max().unwrap_or(0) + 1;
    let mut output = String::new();
    for (key, value) in properties {
        let label = format!("{key}:");
        let _ = writeln!(output, "{label:<width$} {value}");
    }
    output.trim_end().to_string()
}

/// Serializes `value` as pretty JSON
///
/// # Errors
///
/// Returns `CliError::Serialization` if serialization fails.
pub fn format_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Serialization(format!("Failed to serialize to JSON: {e}")))
}

/// Descriptor as printed by `parse`, `uri` and `edit`
#[derive(Debug, Clone, Serialize)]
pub struct DescriptorOutput {
    pub protocol: String,
    pub quick_connect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub uri: String,
    pub valid: bool,
}

impl DescriptorOutput {
    /// Builds the output of `descriptor` with its quick-connect text
    #[must_use]
    pub fn new(descriptor: &ConnectionDescriptor, quick_connect: &str, valid: bool) -> Self {
        Self {
            protocol: descriptor.protocol.id().to_string(),
            quick_connect: quick_connect.to_string(),
            username: descriptor.username().map(str::to_string),
            hostname: descriptor.hostname().map(str::to_string),
            port: descriptor.port(),
            nickname: descriptor.nickname().map(str::to_string),
            uri: descriptor_to_uri(descriptor),
            valid,
        }
    }

    /// Key/value rows for table output
    #[must_use]
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        vec![
            ("Protocol", self.protocol.clone()),
            ("Quick-connect", self.quick_connect.clone()),
            ("Username", show(&self.username)),
            ("Hostname", show(&self.hostname)),
            ("Port", self.port.to_string()),
            ("Nickname", show(&self.nickname)),
            ("URI", self.uri.clone()),
            ("Valid", if self.valid { "yes" } else { "no" }.to_string()),
        ]
    }
}
