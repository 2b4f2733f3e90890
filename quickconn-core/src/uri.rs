//! External connection URIs
//!
//! Links such as `ssh://bob@example.com:2022/#work` or `local:#shell` open
//! the editor with a pre-filled descriptor. The scheme selects the protocol
//! from the registry; the fragment carries the nickname.

use url::{Host, Url};

use crate::error::{EditorError, EditorResult};
use crate::models::{ConnectionDescriptor, GrammarKind, StructuredFields, non_empty};
use crate::protocol::ProtocolRegistry;

/// Builds a descriptor from an external URI
///
/// Missing, zero or out-of-range ports fall back to the protocol default.
/// Percent-encoded components are decoded.
///
/// # Errors
///
/// Returns `EditorError::InvalidUri` if the text is not a URI, its scheme is
/// not a registered protocol, or a host-based protocol has no hostname.
pub fn descriptor_from_uri(
    registry: &ProtocolRegistry,
    uri: &str,
) -> EditorResult<ConnectionDescriptor> {
    let parsed = parse_url(uri.trim())
        .map_err(|e| EditorError::InvalidUri(format!("{uri}: {e}")))?;

    let protocol = registry
        .lookup(parsed.scheme())
        .map_err(|_| EditorError::InvalidUri(format!("unsupported scheme: {}", parsed.scheme())))?
        .clone();

    let mut fields = StructuredFields::for_protocol(&protocol);
    fields.nickname = parsed.fragment().map(decode).and_then(non_empty);

    if protocol.grammar() != GrammarKind::Nickname {
        let hostname = match parsed.host() {
            Some(Host::Domain(domain)) => decode(domain),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            Some(Host::Ipv6(addr)) => addr.to_string(),
            None => String::new(),
        };
        fields.hostname = non_empty(hostname);
        if fields.hostname.is_none() {
            return Err(EditorError::InvalidUri(format!("{uri}: missing hostname")));
        }

        if let Some(port) = parsed.port().filter(|port| *port != 0) {
            fields.port = port;
        }

        if protocol.grammar() == GrammarKind::UserHostPort {
            fields.username = non_empty(decode(parsed.username()));
        }
    }

    tracing::debug!(protocol = %protocol.id(), "Descriptor created from external URI");
    Ok(ConnectionDescriptor::with_fields(protocol, fields))
}

/// Renders the canonical external URI of a descriptor
///
/// Host-based protocols always carry an explicit port.
#[must_use]
pub fn descriptor_to_uri(descriptor: &ConnectionDescriptor) -> String {
    let scheme = descriptor.protocol.id();
    let fragment = descriptor
        .nickname()
        .map(|nickname| format!("#{}", urlencoding::encode(nickname)))
        .unwrap_or_default();

    if descriptor.protocol.grammar() == GrammarKind::Nickname {
        return format!("{scheme}:{fragment}");
    }

    let userinfo = match descriptor.username() {
        Some(user) if descriptor.protocol.grammar() == GrammarKind::UserHostPort => {
            format!("{}@", urlencoding::encode(user))
        }
        _ => String::new(),
    };
    let host = descriptor.hostname().unwrap_or_default();
    let host = if host.contains(':') {
        format!("[{host}]")
    } else {
        urlencoding::encode(host).into_owned()
    };

    format!(
        "{scheme}://{userinfo}{host}:{}/{fragment}",
        descriptor.port()
    )
}

/// Parses `text`, retrying without the port when it is out of range so the
/// protocol default applies
fn parse_url(text: &str) -> Result<Url, url::ParseError> {
    match Url::parse(text) {
        Err(url::ParseError::InvalidPort) => {
            let stripped = without_port(text).ok_or(url::ParseError::InvalidPort)?;
            tracing::debug!(uri = text, "URI port out of range, using protocol default");
            Url::parse(&stripped)
        }
        other => other,
    }
}

/// Removes the `:port` suffix of the authority
///
/// Returns `None` when there is no authority or its port is not all digits.
fn without_port(text: &str) -> Option<String> {
    let authority_start = text.find("://")? + 3;
    let authority_end = text[authority_start..]
        .find(['/', '?', '#'])
        .map_or(text.len(), |offset| authority_start + offset);
    let authority = &text[authority_start..authority_end];
    let host_start = authority.rfind('@').map_or(0, |at| at + 1);
    let host_and_port = &authority[host_start..];
    let host_end = if host_and_port.starts_with('[') {
        host_and_port.find(']')? + 1
    } else {
        host_and_port.find(':')?
    };
    let port = host_and_port[host_end..].strip_prefix(':')?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let cut_start = authority_start + host_start + host_end;
    Some(format!("{}{}", &text[..cut_start], &text[authority_end..]))
}

fn decode(text: &str) -> String {
    urlencoding::decode(text).map_or_else(|_| text.to_string(), |decoded| decoded.into_owned())
}
