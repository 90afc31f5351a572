//! Page state container and lifecycle transitions.
//!
//! This module defines [`PageState`], the single owner of everything the
//! controller mutates: the modal lifecycle value, the modal timeline
//! registry, the entrance sequence, the theme state, and the backdrop target.
//! It is constructed once per page session and closed over by the host's
//! event plumbing; no module-level state exists.
//!
//! # Single-writer invariant
//!
//! The modal lifecycle value is mutated in exactly two places,
//! [`PageState::request_open`] and [`PageState::request_close`]. Every
//! trigger source (open buttons, close buttons, overlay click, Escape)
//! funnels into those two methods through the event handler, so there is no
//! read-modify-write of the shared value anywhere else. Both methods are
//! total: a request disallowed by the current state or naming an unknown
//! modal degrades to a logged no-op.
//!
//! # Frame tick
//!
//! Animation playback is asynchronous relative to the triggering event: the
//! lifecycle value advances synchronously while timelines animate over their
//! durations. The host calls [`PageState::advance`] once per frame and then
//! samples timelines to paint. A close issued while the open animation is
//! still in flight reverses the timeline from its current interpolated
//! position.

use crate::app::{Action, ModalLifecycle};
use crate::domain::{ModalId, Target};
use crate::motion::{Easing, VisualState};
use crate::stage::{EntranceSequence, ModalRegistry};
use crate::theme::ThemeState;
use crate::{BackdropSettings, MotionSettings};

/// Central state container for the page controller.
///
/// Holds the modal lifecycle state machine, the pre-built timelines, theme
/// state, and the configured motion parameters. Mutated by the event handler
/// in response to trigger events; read back by the host each frame.
#[derive(Debug, Clone)]
pub struct PageState {
    /// Which modal, if any, is open. Mutated only by the two lifecycle
    /// methods.
    lifecycle: ModalLifecycle,
    /// One paused reversible timeline per registered modal.
    registry: ModalRegistry,
    /// The hero entrance timeline.
    entrance: EntranceSequence,
    /// Current dark/light theme state.
    theme: ThemeState,
    /// The visual state the hero backdrop is currently driven toward.
    ///
    /// Neutral while closed, blurred and dimmed while a modal is open. Kept
    /// here so the open/close symmetry is observable without a real page.
    backdrop: VisualState,
    /// Whether the page-level "modal-open" marker is set.
    modal_open_marker: bool,
    motion: MotionSettings,
    backdrop_settings: BackdropSettings,
}

impl PageState {
    /// Creates page state from its wired-up collaborators.
    ///
    /// Typically called through [`crate::initialize`], which builds the
    /// registry and entrance sequence from configuration first.
    #[must_use]
    pub fn new(
        registry: ModalRegistry,
        entrance: EntranceSequence,
        theme: ThemeState,
        motion: MotionSettings,
        backdrop_settings: BackdropSettings,
    ) -> Self {
        Self {
            lifecycle: ModalLifecycle::Closed,
            registry,
            entrance,
            theme,
            backdrop: VisualState::settled(),
            modal_open_marker: false,
            motion,
            backdrop_settings,
        }
    }

    /// Runs the page-load sequence: applies the initial theme without a
    /// transition and starts the entrance animation.
    #[must_use]
    pub fn page_loaded(&mut self) -> Vec<Action> {
        let mut actions = self.theme.apply(false, self.motion.icon_spin_duration);
        actions.extend(self.entrance.play());
        actions
    }

    /// Opens a modal if none is open.
    ///
    /// Allowed only from `Closed`. While any modal is open (including the
    /// requested one) the request is a silent no-op; this is the
    /// single-concurrency rule, not an error. An unregistered id is likewise
    /// ignored. On the allowed transition the modal's timeline plays forward
    /// from its current position, the backdrop blur/dim tween is emitted, and
    /// the "modal-open" marker is set.
    #[must_use]
    pub fn request_open(&mut self, id: &ModalId) -> Vec<Action> {
        if let Some(open) = self.lifecycle.open_id() {
            tracing::debug!(requested = %id, open = %open, "open request ignored, a modal is already open");
            return vec![];
        }

        let Some(timeline) = self.registry.get_mut(id) else {
            tracing::debug!(requested = %id, "open request ignored, modal is not registered");
            return vec![];
        };

        timeline.play();
        self.lifecycle = ModalLifecycle::Open(id.clone());
        self.modal_open_marker = true;
        self.backdrop = self.backdrop_settings.blurred_state();

        tracing::debug!(modal = %id, "modal opened");

        vec![
            Action::MarkModalOpen(true),
            Action::Tween {
                target: Target::HeroContent,
                from: None,
                to: self.backdrop,
                duration: self.motion.backdrop_duration,
                easing: Easing::QuadOut,
            },
        ]
    }

    /// Closes the open modal, if any.
    ///
    /// Allowed only from `Open(_)`; from `Closed` it is a silent no-op. The
    /// open timeline plays in reverse from its current position (the exact
    /// inverse of however far the reveal got), the backdrop reverts to
    /// neutral, and the marker is cleared.
    #[must_use]
    pub fn request_close(&mut self) -> Vec<Action> {
        let ModalLifecycle::Open(id) = std::mem::take(&mut self.lifecycle) else {
            tracing::debug!("close request ignored, no modal is open");
            return vec![];
        };

        if let Some(timeline) = self.registry.get_mut(&id) {
            timeline.reverse();
        }
        self.modal_open_marker = false;
        self.backdrop = VisualState::settled();

        tracing::debug!(modal = %id, "modal closed");

        vec![
            Action::Tween {
                target: Target::HeroContent,
                from: None,
                to: self.backdrop,
                duration: self.motion.backdrop_duration,
                easing: Easing::QuadOut,
            },
            Action::MarkModalOpen(false),
        ]
    }

    /// Flips the theme and reapplies it with the icon transition.
    #[must_use]
    pub fn toggle_theme(&mut self) -> Vec<Action> {
        let _ = self.theme.toggle();
        self.theme.apply(true, self.motion.icon_spin_duration)
    }

    /// Adopts a system preference change and reapplies with animation.
    #[must_use]
    pub fn system_theme_changed(&mut self, prefers_dark: bool) -> Vec<Action> {
        self.theme.set_from_system(prefers_dark);
        self.theme.apply(true, self.motion.icon_spin_duration)
    }

    /// Resets and replays the entrance sequence.
    #[must_use]
    pub fn restart_entrance(&mut self) -> Vec<Action> {
        self.entrance.restart()
    }

    /// Advances every timeline by `dt` seconds.
    ///
    /// The host's frame tick. All modal timelines are advanced, not just the
    /// open one: a closing modal keeps reversing after the lifecycle value
    /// has already returned to `Closed`. Paused timelines ignore the tick.
    pub fn advance(&mut self, dt: f32) {
        let _ = self.entrance.advance(dt);
        for timeline in self.registry.timelines_mut() {
            let _ = timeline.advance(dt);
        }
    }

    /// Samples the interpolated state of an element driven by a timeline.
    ///
    /// Hero entrance elements come from the entrance timeline, modals and the
    /// overlay from the registry. Elements driven only by one-off tweens
    /// (hero backdrop, theme icon) have no timeline to sample and return
    /// `None`; the host animates those from the emitted [`Action::Tween`]s.
    #[must_use]
    pub fn sample(&self, target: &Target) -> Option<VisualState> {
        match target {
            Target::HeroTitle | Target::HeroSubtitle | Target::HeroCta => {
                self.entrance.sample(target)
            }
            Target::Modal(id) => self.registry.get(id)?.sample(target),
            Target::Overlay => {
                // The overlay belongs to whichever timeline is driving it:
                // the open modal's, a still-closing one, or (at rest) any.
                let timeline = match self.lifecycle.open_id() {
                    Some(id) => self.registry.get(id),
                    None => self
                        .registry
                        .timelines()
                        .find(|timeline| !timeline.at_rest_start())
                        .or_else(|| self.registry.timelines().next()),
                };
                timeline?.sample(target)
            }
            Target::HeroContent | Target::ThemeIcon => None,
        }
    }

    /// Current modal lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> &ModalLifecycle {
        &self.lifecycle
    }

    /// The open modal's id, if any.
    #[must_use]
    pub fn open_modal(&self) -> Option<&ModalId> {
        self.lifecycle.open_id()
    }

    /// Whether the page-level "modal-open" marker is set.
    #[must_use]
    pub fn modal_open_marker(&self) -> bool {
        self.modal_open_marker
    }

    /// The state the hero backdrop is currently driven toward.
    #[must_use]
    pub fn backdrop(&self) -> VisualState {
        self.backdrop
    }

    /// Current theme state.
    #[must_use]
    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// The modal timeline registry (read-only).
    #[must_use]
    pub fn registry(&self) -> &ModalRegistry {
        &self.registry
    }

    /// The entrance sequence (read-only).
    #[must_use]
    pub fn entrance(&self) -> &EntranceSequence {
        &self.entrance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    const FRAME: f32 = 1.0 / 60.0;

    fn state_with(ids: &[&str]) -> PageState {
        let motion = MotionSettings::default();
        let backdrop = BackdropSettings::default();
        let mut registry = ModalRegistry::new();
        for id in ids {
            registry
                .register(ModalId::new(*id), motion.modal_duration)
                .unwrap();
        }
        let entrance = EntranceSequence::new(&motion);
        PageState::new(registry, entrance, ThemeState::new(true), motion, backdrop)
    }

    fn settle(state: &mut PageState) {
        for _ in 0..10_000 {
            state.advance(FRAME);
        }
    }

    #[test]
    fn open_from_closed_transitions_and_marks_the_page() {
        let mut state = state_with(&["pricing", "contact"]);
        let actions = state.request_open(&ModalId::new("pricing"));

        assert_eq!(state.open_modal(), Some(&ModalId::new("pricing")));
        assert!(state.modal_open_marker());
        assert!(state.backdrop().blur > 0.0);
        assert!(actions.contains(&Action::MarkModalOpen(true)));
        assert!(actions
            .iter()
            .any(|a| matches!(a, Action::Tween { target: Target::HeroContent, .. })));
    }

    #[test]
    fn open_while_open_is_ignored() {
        let mut state = state_with(&["pricing", "contact"]);
        let _ = state.request_open(&ModalId::new("pricing"));

        let actions = state.request_open(&ModalId::new("contact"));
        assert!(actions.is_empty());
        assert_eq!(state.open_modal(), Some(&ModalId::new("pricing")));

        // Reopening the already-open modal is ignored the same way.
        let actions = state.request_open(&ModalId::new("pricing"));
        assert!(actions.is_empty());
        assert_eq!(state.open_modal(), Some(&ModalId::new("pricing")));
    }

    #[test]
    fn unknown_modal_open_is_ignored() {
        let mut state = state_with(&["pricing"]);
        let actions = state.request_open(&ModalId::new("careers"));
        assert!(actions.is_empty());
        assert_eq!(state.lifecycle(), &ModalLifecycle::Closed);
        assert!(!state.modal_open_marker());
    }

    #[test]
    fn close_reverts_marker_and_backdrop() {
        let mut state = state_with(&["pricing"]);
        let _ = state.request_open(&ModalId::new("pricing"));
        let actions = state.request_close();

        assert_eq!(state.lifecycle(), &ModalLifecycle::Closed);
        assert!(!state.modal_open_marker());
        assert_eq!(state.backdrop(), VisualState::settled());
        assert!(actions.contains(&Action::MarkModalOpen(false)));
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = state_with(&["pricing"]);
        let _ = state.request_open(&ModalId::new("pricing"));
        let _ = state.request_close();
        let snapshot = (
            state.lifecycle().clone(),
            state.modal_open_marker(),
            state.backdrop(),
        );

        let actions = state.request_close();
        assert!(actions.is_empty());
        assert_eq!(
            (
                state.lifecycle().clone(),
                state.modal_open_marker(),
                state.backdrop()
            ),
            snapshot
        );
    }

    #[test]
    fn close_while_closed_is_ignored() {
        let mut state = state_with(&["pricing"]);
        let actions = state.request_close();
        assert!(actions.is_empty());
        assert_eq!(state.lifecycle(), &ModalLifecycle::Closed);
    }

    #[test]
    fn full_open_close_cycle_restores_rest_state() {
        let mut state = state_with(&["pricing"]);
        let id = ModalId::new("pricing");
        let rest_modal = state.sample(&Target::Modal(id.clone())).unwrap();

        let _ = state.request_open(&id);
        settle(&mut state);
        assert_eq!(
            state.sample(&Target::Modal(id.clone())),
            Some(VisualState::settled())
        );

        let _ = state.request_close();
        settle(&mut state);
        assert_eq!(state.sample(&Target::Modal(id.clone())), Some(rest_modal));
        assert_eq!(
            state.sample(&Target::Overlay),
            Some(VisualState::settled().with_opacity(0.0))
        );
        assert_eq!(state.backdrop(), VisualState::settled());
        assert!(!state.modal_open_marker());
        assert!(state.registry().get(&id).unwrap().at_rest_start());
    }

    #[test]
    fn close_mid_open_reverses_from_current_position() {
        let mut state = state_with(&["pricing"]);
        let id = ModalId::new("pricing");

        let _ = state.request_open(&id);
        state.advance(0.2);
        let mid = state.registry().get(&id).unwrap().position();
        assert!(mid > 0.0);

        let _ = state.request_close();
        let timeline = state.registry().get(&id).unwrap();
        assert_eq!(timeline.position(), mid);
        assert!(timeline.is_playing());

        settle(&mut state);
        assert!(state.registry().get(&id).unwrap().at_rest_start());
    }

    #[test]
    fn modal_can_reopen_after_closing() {
        let mut state = state_with(&["pricing"]);
        let id = ModalId::new("pricing");
        let _ = state.request_open(&id);
        settle(&mut state);
        let _ = state.request_close();
        settle(&mut state);

        let actions = state.request_open(&id);
        assert!(!actions.is_empty());
        assert_eq!(state.open_modal(), Some(&id));
    }

    #[test]
    fn page_loaded_applies_theme_without_transition_and_starts_entrance() {
        let mut state = state_with(&["pricing"]);
        let actions = state.page_loaded();

        assert!(actions.contains(&Action::SetThemeAttribute(ThemeMode::Dark)));
        assert!(!actions
            .iter()
            .any(|a| matches!(a, Action::Tween { target: Target::ThemeIcon, .. })));
        let resets = actions
            .iter()
            .filter(|a| matches!(a, Action::Set { .. }))
            .count();
        assert_eq!(resets, 3);
        assert!(state.entrance().timeline().is_playing());
    }
}
