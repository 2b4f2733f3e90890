//! Core data structures: protocol specs, connection descriptors and host
//! records.

mod descriptor;
mod host;
mod protocol;

pub use descriptor::{ConnectionDescriptor, StructuredFields, non_empty};
pub use host::{DEFAULT_FONT_SIZE, DisplaySettings, HostColor, HostRecord};
pub use protocol::{FieldKind, GrammarKind, ProtocolSpec};
