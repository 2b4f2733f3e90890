//! Protocol registry: the lookup table of supported protocols.

use crate::error::{EditorError, EditorResult};
use crate::models::ProtocolSpec;

/// Registry of supported protocols
///
/// Protocols keep their registration order, which is the order a protocol
/// selector lists them in. The first registered protocol is the default
/// until [`ProtocolRegistry::set_default`] picks another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolRegistry {
    protocols: Vec<ProtocolSpec>,
    default_index: usize,
}

impl ProtocolRegistry {
    /// Creates a registry with the built-in protocols: ssh, telnet, local
    #[must_use]
    pub fn new() -> Self {
        Self {
            protocols: vec![
                ProtocolSpec::ssh(),
                ProtocolSpec::telnet(),
                ProtocolSpec::local(),
            ],
            default_index: 0,
        }
    }

    /// Registers an additional protocol
    ///
    /// # Errors
    ///
    /// Returns `EditorError::DuplicateProtocol` if the id is already taken.
    pub fn register(&mut self, spec: ProtocolSpec) -> EditorResult<()> {
        if self.position(spec.id()).is_some() {
            return Err(EditorError::DuplicateProtocol(spec.id().to_string()));
        }
        tracing::debug!(protocol = %spec.id(), port = spec.default_port(), "Registered protocol");
        self.protocols.push(spec);
        Ok(())
    }

    /// Looks up a protocol by id (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `EditorError::UnknownProtocol` if the id is not registered.
    pub fn lookup(&self, id: &str) -> EditorResult<&ProtocolSpec> {
        self.position(id)
            .map(|index| &self.protocols[index])
            .ok_or_else(|| EditorError::UnknownProtocol(id.to_string()))
    }

    /// Returns the default protocol
    #[must_use]
    pub fn default_protocol(&self) -> &ProtocolSpec {
        &self.protocols[self.default_index]
    }

    /// Makes `id` the default protocol
    ///
    /// # Errors
    ///
    /// Returns `EditorError::UnknownProtocol` if the id is not registered.
    pub fn set_default(&mut self, id: &str) -> EditorResult<()> {
        self.default_index = self
            .position(id)
            .ok_or_else(|| EditorError::UnknownProtocol(id.to_string()))?;
        Ok(())
    }

    /// Protocol ids in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.protocols.iter().map(ProtocolSpec::id).collect()
    }

    /// All registered protocols in registration order
    #[must_use]
    pub fn protocols(&self) -> &[ProtocolSpec] {
        &self.protocols
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.protocols
            .iter()
            .position(|spec| spec.id().eq_ignore_ascii_case(id))
    }
}

impl Default for ProtocolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
