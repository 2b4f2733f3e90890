//! `hostname [":" port]` grammar (telnet-like), shared by the ssh-like grammar
//! for the part after the `@`.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::StructuredFields;

/// Host names, or bracketed IPv6 literals with an optional zone, followed by
/// an optional `:port`. The port group accepts any text without a colon so
/// that non-numeric ports fall back to the default instead of failing.
static HOST_PORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?P<host>[0-9a-z._-]+)|\[(?P<ipv6>[0-9a-f:]+(?:%[-_.a-z0-9]+)?)\])(?::(?P<port>[^:]*))?$",
    )
    .expect("host/port pattern is a valid regex")
});

/// Parses `hostname [":" port]`
///
/// Returns `None` if the hostname is empty or contains characters outside the
/// hostname alphabet.
pub fn parse(text: &str, default_port: u16) -> Option<StructuredFields> {
    let captures = HOST_PORT.captures(text)?;
    let hostname = captures
        .name("host")
        .or_else(|| captures.name("ipv6"))
        .map(|m| m.as_str().to_string())?;
    let port = port_or_default(captures.name("port").map(|m| m.as_str()), default_port);

    Some(StructuredFields {
        username: None,
        hostname: Some(hostname),
        port,
        nickname: None,
    })
}

/// Renders `hostname [":" port]`, omitting the port when it is the default
pub fn format(hostname: &str, port: u16, default_port: u16) -> String {
    let host = if hostname.contains(':') {
        format!("[{hostname}]")
    } else {
        hostname.to_string()
    };

    if port == default_port {
        host
    } else {
        format!("{host}:{port}")
    }
}

/// Port number from quick-connect text; missing, non-numeric or out-of-range
/// values give the default
fn port_or_default(text: Option<&str>, default_port: u16) -> u16 {
    match text {
        Some(text) => super::parse_port(text).unwrap_or_else(|| {
            tracing::trace!(port = text, default_port, "Quick-connect port not usable, using default");
            default_port
        }),
        None => default_port,
    }
}
