//! Quick-connect parsing, formatting and validation
//!
//! A quick-connect string is the single free-form representation of a
//! connection descriptor, e.g. `bob@example.com:2022`. Each protocol's
//! [`GrammarKind`] selects how it is read and written:
//!
//! | Grammar          | Parse                                  | Format                                  |
//! |------------------|----------------------------------------|-----------------------------------------|
//! | `UserHostPort`   | `[username "@"] hostname [":" port]`   | empty unless username and hostname set  |
//! | `HostPort`       | `hostname [":" port]`                  | empty unless hostname set               |
//! | `Nickname`       | whole text is the nickname             | nickname, possibly empty                |
//!
//! The port is rendered only when it differs from the protocol default, so a
//! bare `host` round-trips to the default port while explicit overrides
//! survive.
//!
//! Parsing never fails loudly: text that does not match yields `None`, which
//! callers treat as an incomplete descriptor.

mod host_port;
mod user_host_port;

use crate::models::{GrammarKind, ProtocolSpec, StructuredFields, non_empty};

/// Parses `raw` with the grammar of `protocol`
///
/// Returns `None` if the text does not match the grammar. For the local-like
/// grammar every string matches; an empty string is an unnamed session.
#[must_use]
pub fn parse(protocol: &ProtocolSpec, raw: &str) -> Option<StructuredFields> {
    let default_port = protocol.default_port();
    let parsed = match protocol.grammar() {
        GrammarKind::UserHostPort => user_host_port::parse(raw, default_port),
        GrammarKind::HostPort => host_port::parse(raw, default_port),
        GrammarKind::Nickname => Some(StructuredFields {
            nickname: non_empty(raw.to_string()),
            ..StructuredFields::for_protocol(protocol)
        }),
    };

    tracing::trace!(
        protocol = %protocol.id(),
        matched = parsed.is_some(),
        "Parsed quick-connect text"
    );
    parsed
}

/// Renders the canonical quick-connect string of `fields` for `protocol`
#[must_use]
pub fn format(protocol: &ProtocolSpec, fields: &StructuredFields) -> String {
    match protocol.grammar() {
        GrammarKind::UserHostPort => user_host_port::format(fields, protocol.default_port()),
        GrammarKind::HostPort => fields
            .hostname
            .as_deref()
            .filter(|host| !host.is_empty())
            .map(|host| host_port::format(host, fields.port, protocol.default_port()))
            .unwrap_or_default(),
        GrammarKind::Nickname => fields.nickname.clone().unwrap_or_default(),
    }
}

/// Decides whether a descriptor is complete
///
/// True when the formatted descriptor is non-empty and the text currently
/// shown in the quick-connect field (`raw`) parses. Checking the shown text
/// rather than only the fields catches stale text left over from a protocol
/// switch.
#[must_use]
pub fn is_valid(protocol: &ProtocolSpec, fields: &StructuredFields, raw: &str) -> bool {
    !format(protocol, fields).is_empty() && parse(protocol, raw).is_some()
}

/// Reads a port number: one or more ASCII digits with a value in 1..=65535
///
/// Signs, spaces and zero are rejected.
#[must_use]
pub fn parse_port(text: &str) -> Option<u16> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u16>().ok().filter(|port| *port != 0)
}

/// Placeholder text for an empty quick-connect field
#[must_use]
pub fn format_hint(protocol: &ProtocolSpec) -> &'static str {
    protocol.grammar().format_hint()
}
