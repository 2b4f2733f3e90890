//! Property tests for quick-connect parsing and formatting
//!
//! - formatting then parsing returns the relevant fields unchanged
//! - the default port is never rendered, any other port always is
//! - formatting is idempotent through a parse
//! - incomplete descriptors format to the empty string

use proptest::prelude::*;
use quickconn_core::models::{ProtocolSpec, StructuredFields};
use quickconn_core::quick_connect::{format, is_valid, parse};

use super::{arb_hostname, arb_nickname, arb_port, arb_username};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn ssh_format_parse_roundtrip(
        username in arb_username(),
        hostname in arb_hostname(),
        port in arb_port(),
    ) {
        let ssh = ProtocolSpec::ssh();
        let fields = StructuredFields::default()
            .with_username(username)
            .with_hostname(hostname)
            .with_port(port);

        let text = format(&ssh, &fields);
        prop_assert!(!text.is_empty());
        let parsed = parse(&ssh, &text).expect("formatted text parses");
        prop_assert!(parsed.relevant_eq(&fields, &ssh), "{text:?} -> {parsed:?}");
        prop_assert!(is_valid(&ssh, &parsed, &text));
    }

    #[test]
    fn telnet_format_parse_roundtrip(hostname in arb_hostname(), port in arb_port()) {
        let telnet = ProtocolSpec::telnet();
        let fields = StructuredFields::default()
            .with_hostname(hostname)
            .with_port(port);

        let text = format(&telnet, &fields);
        let parsed = parse(&telnet, &text).expect("formatted text parses");
        prop_assert!(parsed.relevant_eq(&fields, &telnet));
        prop_assert_eq!(parsed.username, None);
    }

    #[test]
    fn local_format_parse_roundtrip(nickname in arb_nickname()) {
        let local = ProtocolSpec::local();
        let fields = StructuredFields::for_protocol(&local).with_nickname(nickname.clone());

        let text = format(&local, &fields);
        prop_assert_eq!(&text, &nickname);
        let parsed = parse(&local, &text).expect("every text is a local name");
        prop_assert_eq!(parsed.nickname.as_deref(), Some(nickname.as_str()));
    }

    #[test]
    fn default_port_is_suppressed(
        username in arb_username(),
        hostname in "[a-z][a-z0-9]{0,15}",
        port in arb_port(),
    ) {
        let ssh = ProtocolSpec::ssh();
        let fields = StructuredFields::default()
            .with_username(username)
            .with_hostname(hostname)
            .with_port(port);

        let text = format(&ssh, &fields);
        let suffix = format!(":{port}");
        if port == ssh.default_port() {
            prop_assert!(!text.ends_with(&suffix), "{text:?} renders default port");
        } else {
            prop_assert!(text.ends_with(&suffix), "{text:?} drops port {port}");
        }
    }

    #[test]
    fn format_is_idempotent_through_parse(
        username in arb_username(),
        hostname in arb_hostname(),
        port in arb_port(),
    ) {
        let ssh = ProtocolSpec::ssh();
        let fields = StructuredFields::default()
            .with_username(username)
            .with_hostname(hostname)
            .with_port(port);

        let once = format(&ssh, &fields);
        let twice = format(&ssh, &parse(&ssh, &once).expect("formatted text parses"));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn ssh_without_username_formats_empty(hostname in arb_hostname(), port in arb_port()) {
        let ssh = ProtocolSpec::ssh();
        let fields = StructuredFields::default()
            .with_hostname(hostname)
            .with_port(port);
        prop_assert_eq!(format(&ssh, &fields), "");
        prop_assert!(!is_valid(&ssh, &fields, ""));
    }

    #[test]
    fn out_of_range_ports_fall_back(hostname in "[a-z]{1,10}", port in 65_536u32..1_000_000u32) {
        let telnet = ProtocolSpec::telnet();
        let parsed = parse(&telnet, &format!("{hostname}:{port}")).expect("host still parses");
        prop_assert_eq!(parsed.port, 23);
        prop_assert_eq!(parsed.hostname.as_deref(), Some(hostname.as_str()));
    }

    #[test]
    fn text_with_spaces_never_parses_for_host_grammars(
        left in "[a-z]{1,8}",
        right in "[a-z]{1,8}",
    ) {
        let text = format!("{left} {right}");
        prop_assert!(parse(&ProtocolSpec::ssh(), &text).is_none());
        prop_assert!(parse(&ProtocolSpec::telnet(), &text).is_none());
    }
}

#[test]
fn ipv6_literal_keeps_brackets_in_text_only() {
    let ssh = ProtocolSpec::ssh();
    let parsed = parse(&ssh, "ops@[fe80::1%eth0]:2200").unwrap();
    assert_eq!(parsed.hostname.as_deref(), Some("fe80::1%eth0"));
    assert_eq!(parsed.port, 2200);
    assert_eq!(format(&ssh, &parsed), "ops@[fe80::1%eth0]:2200");
}

#[test]
fn empty_username_is_rejected() {
    assert!(parse(&ProtocolSpec::ssh(), "@host").is_none());
}

#[test]
fn trailing_colon_gives_default_port() {
    let parsed = parse(&ProtocolSpec::ssh(), "bob@host:").unwrap();
    assert_eq!(parsed.port, 22);
    assert_eq!(parsed.hostname.as_deref(), Some("host"));
}
