//! Protocol layer for `QuickConn`
//!
//! The registry maps protocol ids to their [`ProtocolSpec`]: default port,
//! visible structured fields and quick-connect grammar. Grammar dispatch
//! happens once per call on [`GrammarKind`](crate::models::GrammarKind), never
//! on protocol-name strings.

mod registry;

pub use registry::ProtocolRegistry;

pub use crate::models::ProtocolSpec;
