//! Property test modules

mod bundle_tests;
mod external_uri_tests;
mod quick_connect_tests;
mod reconciliation_tests;

use proptest::prelude::*;

/// Strategy for hostnames the grammars accept
pub fn arb_hostname() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,15}",
        "[a-z][a-z0-9]{0,7}\\.[a-z]{2,4}",
        (1u8..255u8, 0u8..255u8, 0u8..255u8, 1u8..255u8)
            .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}")),
        Just("::1".to_string()),
        Just("fe80::1".to_string()),
    ]
}

/// Strategy for non-empty usernames, including ones containing `@`
pub fn arb_username() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_.-]{0,15}",
        "[a-z]{1,8}@[a-z]{1,8}",
    ]
}

/// Strategy for ports, biased towards the built-in defaults
pub fn arb_port() -> impl Strategy<Value = u16> {
    prop_oneof![Just(22u16), Just(23u16), 1u16..=u16::MAX]
}

/// Strategy for local session names
pub fn arb_nickname() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _@:.-]{1,24}"
}
