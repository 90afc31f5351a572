//! Modal identity domain type.
//!
//! This module defines [`ModalId`], the typed identifier connecting markup
//! trigger declarations, the modal registry, and the lifecycle state machine.
//! The set of valid identifiers is closed at startup: every id is registered
//! exactly once when the page is wired up, and requests naming anything else
//! are treated as no-ops by the controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered modal.
///
/// A thin newtype over the identifier string declared in markup (the value an
/// open trigger carries). Using a dedicated type instead of bare strings keeps
/// registry keys, lifecycle state, and trigger bindings from drifting apart.
///
/// # Examples
///
/// ```
/// use limelight::domain::ModalId;
///
/// let id = ModalId::new("pricing");
/// assert_eq!(id.as_str(), "pricing");
/// assert_eq!(id.to_string(), "pricing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalId(String);

impl ModalId {
    /// Creates a modal identifier from the declared identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModalId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ModalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_follows_declared_identifier() {
        assert_eq!(ModalId::new("pricing"), ModalId::from("pricing"));
        assert_ne!(ModalId::new("pricing"), ModalId::new("contact"));
    }

    #[test]
    fn display_matches_raw_identifier() {
        assert_eq!(ModalId::new("contact").to_string(), "contact");
    }
}
