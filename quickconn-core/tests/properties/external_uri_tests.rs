//! Property tests for external URIs
//!
//! - rendering a descriptor and reading it back is lossless
//! - rendered URIs always carry an explicit port
//! - ports above 65535 fall back to the protocol default

use proptest::prelude::*;
use quickconn_core::models::{ConnectionDescriptor, StructuredFields};
use quickconn_core::protocol::ProtocolRegistry;
use quickconn_core::uri::{descriptor_from_uri, descriptor_to_uri};

use super::{arb_hostname, arb_nickname, arb_port, arb_username};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn ssh_uri_roundtrip(
        username in proptest::option::of(arb_username()),
        hostname in arb_hostname(),
        port in arb_port(),
        nickname in proptest::option::of(arb_nickname()),
    ) {
        let registry = ProtocolRegistry::new();
        let mut fields = StructuredFields::default().with_hostname(hostname).with_port(port);
        fields.username = username;
        fields.nickname = nickname;
        let descriptor =
            ConnectionDescriptor::with_fields(registry.lookup("ssh").unwrap().clone(), fields);

        let uri = descriptor_to_uri(&descriptor);
        let port_suffix = format!(":{port}/");
        prop_assert!(uri.starts_with("ssh://"));
        prop_assert!(uri.contains(&port_suffix), "{uri} lacks port");
        prop_assert_eq!(descriptor_from_uri(&registry, &uri).unwrap(), descriptor);
    }

    #[test]
    fn out_of_range_port_uses_default(
        username in arb_username(),
        hostname in arb_hostname(),
        port in 65_536u32..1_000_000,
    ) {
        let registry = ProtocolRegistry::new();
        let host = if hostname.contains(':') { format!("[{hostname}]") } else { hostname.clone() };
        let uri = format!(
            "ssh://{}@{host}:{port}/#work",
            urlencoding::encode(&username)
        );

        let descriptor = descriptor_from_uri(&registry, &uri).unwrap();
        prop_assert_eq!(descriptor.port(), 22);
        prop_assert_eq!(descriptor.username(), Some(username.as_str()));
        prop_assert_eq!(descriptor.hostname(), Some(hostname.as_str()));
        prop_assert_eq!(descriptor.nickname(), Some("work"));
    }

    #[test]
    fn telnet_uri_ignores_username(username in arb_username(), hostname in "[a-z]{1,12}") {
        let registry = ProtocolRegistry::new();
        let uri = format!("telnet://{username}@{hostname}");
        // usernames containing '@' are not valid userinfo; the url crate may reject them
        if let Ok(descriptor) = descriptor_from_uri(&registry, &uri) {
            prop_assert_eq!(descriptor.username(), None);
            prop_assert_eq!(descriptor.port(), 23);
        }
    }

    #[test]
    fn local_uri_roundtrip(nickname in arb_nickname()) {
        let registry = ProtocolRegistry::new();
        let descriptor = ConnectionDescriptor::with_fields(
            registry.lookup("local").unwrap().clone(),
            StructuredFields::for_protocol(registry.lookup("local").unwrap())
                .with_nickname(nickname),
        );
        let uri = descriptor_to_uri(&descriptor);
        prop_assert!(uri.starts_with("local:#"));
        prop_assert_eq!(descriptor_from_uri(&registry, &uri).unwrap(), descriptor);
    }
}
