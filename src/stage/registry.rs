//! Modal timeline registry.
//!
//! One reversible timeline is built per modal when the page is wired up and
//! kept for the life of the page: the open animation plays it forward, the
//! close animation plays the same timeline backward, so the two can never
//! drift apart. Registration also sets the modal's initial rest state
//! (slightly scaled down, invisible) as the timeline's origin.
//!
//! Cardinality is bounded by the fixed number of modals in the markup, so
//! there is no eviction; entries are never rebuilt or disposed.

use crate::domain::{LimelightError, ModalId, Result, Target};
use crate::motion::{Easing, StepPosition, StepSpec, Timeline, TimelineBuilder, VisualState};
use std::collections::HashMap;

/// Scale factor of a modal at rest before it is revealed.
const HIDDEN_SCALE: f32 = 0.95;

/// Typed mapping from the closed set of modal identifiers to their timelines.
///
/// Built once at startup. Duplicate registration is a setup error surfaced
/// immediately; an unknown id at request time is the caller's no-op.
///
/// # Examples
///
/// ```
/// use limelight::domain::ModalId;
/// use limelight::stage::ModalRegistry;
///
/// let mut registry = ModalRegistry::new();
/// registry.register(ModalId::new("pricing"), 0.6).unwrap();
/// assert!(registry.contains(&ModalId::new("pricing")));
/// assert!(registry.get(&ModalId::new("careers")).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModalRegistry {
    timelines: HashMap<ModalId, Timeline>,
}

impl ModalRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and stores the paused reveal timeline for a modal.
    ///
    /// The timeline fades the shared overlay in while the modal itself pops
    /// from invisible-and-scaled-down to settled, both over `duration`
    /// seconds with the page's default quintic ease.
    ///
    /// # Errors
    ///
    /// Returns [`LimelightError::Registry`] if the id is already registered,
    /// so a duplicated markup declaration fails at setup rather than
    /// producing two timelines fighting over one element.
    pub fn register(&mut self, id: ModalId, duration: f32) -> Result<()> {
        if self.timelines.contains_key(&id) {
            return Err(LimelightError::Registry(format!(
                "modal '{id}' is already registered"
            )));
        }

        let timeline = TimelineBuilder::new(duration, Easing::QuintOut)
            .step(StepSpec::tween(
                Target::Overlay,
                VisualState::settled().with_opacity(0.0),
                VisualState::settled(),
            ))
            .step(
                StepSpec::tween(
                    Target::Modal(id.clone()),
                    VisualState::settled()
                        .with_opacity(0.0)
                        .with_scale(HIDDEN_SCALE),
                    VisualState::settled(),
                )
                .at(StepPosition::WithPrevious),
            )
            .build();

        tracing::debug!(modal = %id, duration, "modal timeline registered");
        self.timelines.insert(id, timeline);
        Ok(())
    }

    /// Returns the timeline for `id`, or `None` if unregistered.
    #[must_use]
    pub fn get(&self, id: &ModalId) -> Option<&Timeline> {
        self.timelines.get(id)
    }

    /// Returns the timeline for `id` mutably, or `None` if unregistered.
    #[must_use]
    pub fn get_mut(&mut self, id: &ModalId) -> Option<&mut Timeline> {
        self.timelines.get_mut(id)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &ModalId) -> bool {
        self.timelines.contains_key(id)
    }

    /// Number of registered modals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }

    /// Iterates over all timelines.
    pub fn timelines(&self) -> impl Iterator<Item = &Timeline> {
        self.timelines.values()
    }

    /// Iterates over all timelines mutably.
    ///
    /// Used by the frame tick: a closing modal keeps animating after the
    /// lifecycle state has already returned to closed, so every timeline is
    /// advanced, not just the open one. Paused timelines ignore the tick.
    pub fn timelines_mut(&mut self) -> impl Iterator<Item = &mut Timeline> {
        self.timelines.values_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_modal_rests_hidden() {
        let mut registry = ModalRegistry::new();
        let id = ModalId::new("pricing");
        registry.register(id.clone(), 0.6).unwrap();

        let timeline = registry.get(&id).unwrap();
        assert!(timeline.at_rest_start());
        let modal = timeline.sample(&Target::Modal(id)).unwrap();
        assert_eq!(modal.opacity, 0.0);
        assert_eq!(modal.scale, HIDDEN_SCALE);
    }

    #[test]
    fn duplicate_registration_fails_fast() {
        let mut registry = ModalRegistry::new();
        registry.register(ModalId::new("pricing"), 0.6).unwrap();
        let err = registry.register(ModalId::new("pricing"), 0.6);
        assert!(matches!(err, Err(LimelightError::Registry(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_id_lookup_is_none() {
        let registry = ModalRegistry::new();
        assert!(registry.get(&ModalId::new("missing")).is_none());
        assert!(!registry.contains(&ModalId::new("missing")));
    }

    #[test]
    fn overlay_and_modal_reveal_together() {
        let mut registry = ModalRegistry::new();
        let id = ModalId::new("contact");
        registry.register(id.clone(), 0.6).unwrap();

        let timeline = registry.get_mut(&id).unwrap();
        timeline.play();
        timeline.advance(0.3);
        let overlay = timeline.sample(&Target::Overlay).unwrap();
        let modal = timeline.sample(&Target::Modal(id)).unwrap();
        assert!(overlay.opacity > 0.0);
        assert!((overlay.opacity - modal.opacity).abs() < 1e-6);
    }
}
