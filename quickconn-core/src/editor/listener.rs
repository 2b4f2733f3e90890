//! Output notifications of the URI editor.

use serde::{Deserialize, Serialize};

use crate::models::ConnectionDescriptor;

/// Receives validity notifications from the URI editor
pub trait UriEditorListener {
    /// The descriptor settled in a complete, valid state
    fn on_valid_uri_entered(&mut self, descriptor: &ConnectionDescriptor);

    /// The descriptor settled in an incomplete or invalid state
    fn on_invalid_uri_entered(&mut self);
}

/// When the URI editor notifies its listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    /// One notification after every settled edit
    #[default]
    EverySettle,
    /// Only when validity differs from the last notification
    TransitionsOnly,
}

/// A notification recorded by [`NotificationLog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriNotification {
    /// `on_valid_uri_entered`
    Valid(ConnectionDescriptor),
    /// `on_invalid_uri_entered`
    Invalid,
}

/// Listener that records every notification in order
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<UriNotification>,
}

impl NotificationLog {
    /// Creates an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded notifications, oldest first
    #[must_use]
    pub fn entries(&self) -> &[UriNotification] {
        &self.entries
    }

    /// Most recent notification
    #[must_use]
    pub fn last(&self) -> Option<&UriNotification> {
        self.entries.last()
    }

    /// Returns true if the most recent notification was `Valid`
    #[must_use]
    pub fn last_was_valid(&self) -> bool {
        matches!(self.last(), Some(UriNotification::Valid(_)))
    }

    /// Number of recorded notifications
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all recorded notifications
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl UriEditorListener for NotificationLog {
    fn on_valid_uri_entered(&mut self, descriptor: &ConnectionDescriptor) {
        self.entries.push(UriNotification::Valid(descriptor.clone()));
    }

    fn on_invalid_uri_entered(&mut self) {
        self.entries.push(UriNotification::Invalid);
    }
}
