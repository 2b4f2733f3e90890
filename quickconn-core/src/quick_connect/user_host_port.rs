//! `[username "@"] hostname [":" port]` grammar (ssh-like).

use super::host_port;
use crate::models::StructuredFields;

/// Parses `[username "@"] hostname [":" port]`
///
/// The username ends at the last `@`, so usernames may themselves contain
/// `@`. An `@` with nothing before it is rejected.
pub fn parse(text: &str, default_port: u16) -> Option<StructuredFields> {
    let (username, rest) = match text.rsplit_once('@') {
        Some(("", _)) => return None,
        Some((user, rest)) => (Some(user.to_string()), rest),
        None => (None, text),
    };

    let mut fields = host_port::parse(rest, default_port)?;
    fields.username = username;
    Some(fields)
}

/// Renders `username "@" hostname [":" port]`
///
/// Both username and hostname are required; otherwise the result is empty.
pub fn format(fields: &StructuredFields, default_port: u16) -> String {
    match (fields.username.as_deref(), fields.hostname.as_deref()) {
        (Some(user), Some(host)) if !user.is_empty() && !host.is_empty() => {
            format!("{user}@{}", host_port::format(host, fields.port, default_port))
        }
        _ => String::new(),
    }
}
