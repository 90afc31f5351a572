//! Trigger dispatch table.
//!
//! The markup owns an arbitrary number of trigger elements: open buttons
//! carrying a modal identifier, close buttons, the shared overlay, the theme
//! toggle, and the entrance refresh control. This module binds each trigger
//! source to exactly one controller event at setup time, so the state machine
//! never cares how many elements happen to feed it.
//!
//! Bindings that name an unregistered modal fail during setup; a fired
//! trigger that was never bound resolves to nothing and is ignored.

use crate::app::Event;
use crate::domain::{LimelightError, ModalId, Result};
use crate::stage::ModalRegistry;
use std::collections::HashMap;

/// The event role a trigger source is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TriggerRole {
    /// Opens the named modal.
    Open(ModalId),
    /// Closes whichever modal is open.
    Close,
    /// Overlay click, closes the open modal.
    Overlay,
    /// Flips the theme.
    ThemeToggle,
    /// Restarts the entrance sequence.
    Refresh,
}

/// Registration table mapping trigger sources to controller events.
///
/// Sources are opaque element reference strings owned by the host. Each
/// source can carry exactly one role; rebinding is a setup error.
///
/// # Examples
///
/// ```
/// use limelight::domain::ModalId;
/// use limelight::stage::{ModalRegistry, TriggerMap};
///
/// let mut registry = ModalRegistry::new();
/// registry.register(ModalId::new("pricing"), 0.6).unwrap();
///
/// let mut triggers = TriggerMap::new();
/// triggers.bind_open("open-pricing", ModalId::new("pricing"), &registry).unwrap();
/// triggers.bind_close("close-button").unwrap();
/// assert!(triggers.resolve("open-pricing").is_some());
/// assert!(triggers.resolve("unbound").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriggerMap {
    bindings: HashMap<String, TriggerRole>,
}

impl TriggerMap {
    /// Creates an empty trigger table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `source` as an open trigger for `modal`.
    ///
    /// # Errors
    ///
    /// Returns [`LimelightError::Registry`] if the modal is not registered
    /// (an invalid markup reference, caught at setup rather than silently at
    /// request time) or if the source is already bound.
    pub fn bind_open(
        &mut self,
        source: impl Into<String>,
        modal: ModalId,
        registry: &ModalRegistry,
    ) -> Result<()> {
        if !registry.contains(&modal) {
            return Err(LimelightError::Registry(format!(
                "open trigger references unregistered modal '{modal}'"
            )));
        }
        self.bind(source.into(), TriggerRole::Open(modal))
    }

    /// Binds `source` as a close trigger.
    ///
    /// # Errors
    ///
    /// Returns [`LimelightError::Registry`] if the source is already bound.
    pub fn bind_close(&mut self, source: impl Into<String>) -> Result<()> {
        self.bind(source.into(), TriggerRole::Close)
    }

    /// Binds `source` as the overlay close trigger.
    ///
    /// # Errors
    ///
    /// Returns [`LimelightError::Registry`] if the source is already bound.
    pub fn bind_overlay(&mut self, source: impl Into<String>) -> Result<()> {
        self.bind(source.into(), TriggerRole::Overlay)
    }

    /// Binds `source` as the theme toggle trigger.
    ///
    /// # Errors
    ///
    /// Returns [`LimelightError::Registry`] if the source is already bound.
    pub fn bind_theme_toggle(&mut self, source: impl Into<String>) -> Result<()> {
        self.bind(source.into(), TriggerRole::ThemeToggle)
    }

    /// Binds `source` as the entrance refresh trigger.
    ///
    /// # Errors
    ///
    /// Returns [`LimelightError::Registry`] if the source is already bound.
    pub fn bind_refresh(&mut self, source: impl Into<String>) -> Result<()> {
        self.bind(source.into(), TriggerRole::Refresh)
    }

    /// Resolves a fired trigger source to its controller event.
    ///
    /// Returns `None` for unbound sources; firing those is not an error, the
    /// host simply has elements this controller does not manage.
    #[must_use]
    pub fn resolve(&self, source: &str) -> Option<Event> {
        let event = match self.bindings.get(source)? {
            TriggerRole::Open(id) => Event::OpenRequested(id.clone()),
            TriggerRole::Close => Event::CloseRequested,
            TriggerRole::Overlay => Event::OverlayClicked,
            TriggerRole::ThemeToggle => Event::ThemeToggled,
            TriggerRole::Refresh => Event::EntranceRefreshRequested,
        };
        Some(event)
    }

    /// Number of bound sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no sources are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn bind(&mut self, source: String, role: TriggerRole) -> Result<()> {
        if self.bindings.contains_key(&source) {
            return Err(LimelightError::Registry(format!(
                "trigger source '{source}' is already bound"
            )));
        }
        tracing::trace!(source = %source, role = ?role, "trigger bound");
        self.bindings.insert(source, role);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(ids: &[&str]) -> ModalRegistry {
        let mut registry = ModalRegistry::new();
        for id in ids {
            registry.register(ModalId::new(*id), 0.6).unwrap();
        }
        registry
    }

    #[test]
    fn open_binding_resolves_to_its_modal() {
        let registry = registry_with(&["pricing", "contact"]);
        let mut triggers = TriggerMap::new();
        triggers
            .bind_open("btn-pricing", ModalId::new("pricing"), &registry)
            .unwrap();

        assert_eq!(
            triggers.resolve("btn-pricing"),
            Some(Event::OpenRequested(ModalId::new("pricing")))
        );
    }

    #[test]
    fn open_binding_to_unknown_modal_fails_fast() {
        let registry = registry_with(&["pricing"]);
        let mut triggers = TriggerMap::new();
        let err = triggers.bind_open("btn-careers", ModalId::new("careers"), &registry);
        assert!(matches!(err, Err(LimelightError::Registry(_))));
        assert!(triggers.is_empty());
    }

    #[test]
    fn rebinding_a_source_fails() {
        let registry = registry_with(&["pricing"]);
        let mut triggers = TriggerMap::new();
        triggers.bind_close("btn").unwrap();
        let err = triggers.bind_open("btn", ModalId::new("pricing"), &registry);
        assert!(matches!(err, Err(LimelightError::Registry(_))));
    }

    #[test]
    fn auxiliary_roles_resolve_to_their_events() {
        let mut triggers = TriggerMap::new();
        triggers.bind_close("x").unwrap();
        triggers.bind_overlay("overlay").unwrap();
        triggers.bind_theme_toggle("theme").unwrap();
        triggers.bind_refresh("logo").unwrap();

        assert_eq!(triggers.resolve("x"), Some(Event::CloseRequested));
        assert_eq!(triggers.resolve("overlay"), Some(Event::OverlayClicked));
        assert_eq!(triggers.resolve("theme"), Some(Event::ThemeToggled));
        assert_eq!(
            triggers.resolve("logo"),
            Some(Event::EntranceRefreshRequested)
        );
    }

    #[test]
    fn unbound_source_resolves_to_none() {
        let triggers = TriggerMap::new();
        assert_eq!(triggers.resolve("anything"), None);
    }
}
