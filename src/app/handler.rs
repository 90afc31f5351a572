//! Event handling and state transition dispatch.
//!
//! This module implements the event handler that processes trigger events and
//! system notifications, translating them into state changes and action
//! sequences. It is the only caller of the lifecycle transition methods, so
//! every trigger source on the page converges on the same two functions.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Trigger events arrive from the host (resolved via
//!    [`TriggerMap`](crate::stage::TriggerMap) or mapped directly, as with
//!    Escape)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`PageState`] methods
//! 4. Actions are collected and returned for execution by the host
//!
//! # Event Types
//!
//! - **Lifecycle**: `OpenRequested`, `CloseRequested`, `OverlayClicked`,
//!   `EscapePressed` — all funnel into the two lifecycle methods
//! - **Theme**: `ThemeToggled`, `SystemThemeChanged`
//! - **Sequence**: `PageLoaded`, `EntranceRefreshRequested`
//!
//! # Example
//!
//! ```
//! use limelight::app::{handle_event, Event};
//! use limelight::{initialize, Config};
//!
//! let mut state = initialize(&Config::default(), true).unwrap();
//! let actions = handle_event(&mut state, &Event::PageLoaded);
//! assert!(!actions.is_empty());
//! ```

use crate::app::{Action, PageState};
use crate::domain::ModalId;

/// Events triggered by user input or system notifications.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The UI thread processes one event at a time, which
/// is what keeps the shared lifecycle value race-free despite the number of
/// trigger sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The page finished loading: apply the initial theme (no transition)
    /// and play the entrance sequence.
    PageLoaded,

    /// An open trigger fired for the named modal.
    OpenRequested(ModalId),

    /// A close trigger fired.
    CloseRequested,

    /// The shared overlay was clicked.
    OverlayClicked,

    /// Escape was pressed. Closes the open modal; ignored while none is
    /// open.
    EscapePressed,

    /// The theme toggle was activated.
    ThemeToggled,

    /// The system-level color-scheme preference changed.
    ///
    /// Fires asynchronously whenever the OS or browser theme changes,
    /// independent of user action on the page.
    SystemThemeChanged {
        /// Whether the system now prefers a dark appearance.
        prefers_dark: bool,
    },

    /// The entrance refresh control was activated.
    EntranceRefreshRequested,
}

/// Processes an event, mutates page state, and returns actions to execute.
///
/// Every operation here is a synchronous, total function over current state
/// plus input: requests disallowed by the lifecycle invariant or naming an
/// unknown modal return an empty action list instead of failing. The host
/// executes returned actions in order.
///
/// # Tracing
///
/// Each call creates a debug-level span carrying the event type.
#[must_use]
pub fn handle_event(state: &mut PageState, event: &Event) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PageLoaded => state.page_loaded(),
        Event::OpenRequested(id) => state.request_open(id),
        Event::CloseRequested | Event::OverlayClicked | Event::EscapePressed => {
            state.request_close()
        }
        Event::ThemeToggled => state.toggle_theme(),
        Event::SystemThemeChanged { prefers_dark } => state.system_theme_changed(*prefers_dark),
        Event::EntranceRefreshRequested => state.restart_entrance(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ModalLifecycle;
    use crate::domain::Target;
    use crate::theme::ThemeMode;
    use crate::{initialize, Config};

    fn loaded_state() -> PageState {
        let config = Config {
            modals: vec![ModalId::new("pricing"), ModalId::new("contact")],
            ..Config::default()
        };
        let mut state = initialize(&config, true).unwrap();
        let _ = handle_event(&mut state, &Event::PageLoaded);
        state
    }

    #[test]
    fn open_event_opens_the_named_modal() {
        let mut state = loaded_state();
        let _ = handle_event(&mut state, &Event::OpenRequested(ModalId::new("pricing")));
        assert_eq!(state.open_modal(), Some(&ModalId::new("pricing")));
        assert!(state.modal_open_marker());
    }

    #[test]
    fn open_while_open_keeps_the_first_modal() {
        let mut state = loaded_state();
        let _ = handle_event(&mut state, &Event::OpenRequested(ModalId::new("pricing")));
        let actions = handle_event(&mut state, &Event::OpenRequested(ModalId::new("contact")));
        assert!(actions.is_empty());
        assert_eq!(state.open_modal(), Some(&ModalId::new("pricing")));
    }

    #[test]
    fn escape_closes_the_open_modal() {
        let mut state = loaded_state();
        let _ = handle_event(&mut state, &Event::OpenRequested(ModalId::new("pricing")));
        let actions = handle_event(&mut state, &Event::EscapePressed);
        assert_eq!(state.lifecycle(), &ModalLifecycle::Closed);
        assert!(!state.modal_open_marker());
        assert!(actions.contains(&Action::MarkModalOpen(false)));
    }

    #[test]
    fn escape_while_closed_does_nothing() {
        let mut state = loaded_state();
        let actions = handle_event(&mut state, &Event::EscapePressed);
        assert!(actions.is_empty());
    }

    #[test]
    fn overlay_click_and_close_trigger_share_the_close_path() {
        for close_event in [Event::OverlayClicked, Event::CloseRequested] {
            let mut state = loaded_state();
            let _ = handle_event(&mut state, &Event::OpenRequested(ModalId::new("contact")));
            let _ = handle_event(&mut state, &close_event);
            assert_eq!(state.lifecycle(), &ModalLifecycle::Closed);
        }
    }

    #[test]
    fn double_toggle_round_trips_with_two_transitions() {
        let mut state = loaded_state();
        let initial = state.theme().mode();

        let first = handle_event(&mut state, &Event::ThemeToggled);
        let second = handle_event(&mut state, &Event::ThemeToggled);

        assert_eq!(state.theme().mode(), initial);
        let spins = |actions: &[Action]| {
            actions
                .iter()
                .filter(|a| matches!(a, Action::Tween { target: Target::ThemeIcon, .. }))
                .count()
        };
        assert_eq!(spins(&first) + spins(&second), 2);
    }

    #[test]
    fn system_change_applies_with_animation() {
        let mut state = loaded_state();
        let actions = handle_event(
            &mut state,
            &Event::SystemThemeChanged { prefers_dark: false },
        );
        assert_eq!(state.theme().mode(), ThemeMode::Light);
        assert!(actions
            .iter()
            .any(|a| matches!(a, Action::Tween { target: Target::ThemeIcon, .. })));
    }

    #[test]
    fn refresh_event_restarts_the_entrance() {
        let mut state = loaded_state();
        for _ in 0..1_000 {
            state.advance(1.0 / 60.0);
        }
        assert!(state.entrance().timeline().at_rest_end());

        let actions = handle_event(&mut state, &Event::EntranceRefreshRequested);
        assert_eq!(actions.len(), 3);
        assert!(state.entrance().timeline().is_playing());
    }
}
