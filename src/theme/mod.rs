//! Theme state management.
//!
//! This module owns the page's dark/light state: initialization from the
//! system preference, explicit user toggles, and asynchronous
//! system-preference-change notifications. Applying the theme emits effect
//! commands for the host (persisted theme attribute, icon path swap, and an
//! optional rotate-and-scale icon transition).
//!
//! # Behavior
//!
//! - The first apply after page load runs without a transition so initial
//!   paint is not accompanied by a spinning icon.
//! - Every later apply (toggle or system change) plays the spin.
//! - The icon shows the *action* affordance, not the state: sun while dark
//!   mode is active, moon while light mode is active.
//!
//! # Example
//!
//! ```
//! use limelight::theme::{ThemeMode, ThemeState};
//!
//! let mut theme = ThemeState::new(true);
//! assert_eq!(theme.mode(), ThemeMode::Dark);
//!
//! theme.toggle();
//! assert_eq!(theme.mode(), ThemeMode::Light);
//! ```

pub mod icon;

pub use icon::IconGlyph;

use crate::app::Action;
use crate::domain::Target;
use crate::motion::{Easing, VisualState};
use serde::{Deserialize, Serialize};

/// The page's visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark appearance.
    Dark,
    /// Light appearance.
    Light,
}

impl ThemeMode {
    /// Builds a mode from a system dark-preference flag.
    #[must_use]
    pub const fn from_prefers_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value written to the page's persisted theme attribute.
    #[must_use]
    pub const fn attribute_value(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Current theme state, mutated only by the controller.
///
/// Holds the single process-wide dark/light value. Constructed once per page
/// session from the queried system preference; later mutations come from the
/// user toggle or system-preference-change events, both routed through the
/// event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    /// Creates theme state from the system preference queried at startup.
    #[must_use]
    pub const fn new(prefers_dark: bool) -> Self {
        Self {
            mode: ThemeMode::from_prefers_dark(prefers_dark),
        }
    }

    /// The current mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips the mode and returns the new value.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        tracing::debug!(mode = self.mode.attribute_value(), "theme toggled");
        self.mode
    }

    /// Adopts a system-preference-change notification.
    pub fn set_from_system(&mut self, prefers_dark: bool) {
        self.mode = ThemeMode::from_prefers_dark(prefers_dark);
        tracing::debug!(
            mode = self.mode.attribute_value(),
            "theme updated from system preference"
        );
    }

    /// Emits the effect commands that realize the current mode on the page.
    ///
    /// Always emits the persisted theme attribute and the icon path swap.
    /// When `animate` is set, also emits the icon spin transition (rotation
    /// 0 to 360 degrees, scale 0.8 to 1.0 over `spin_duration` seconds).
    #[must_use]
    pub fn apply(&self, animate: bool, spin_duration: f32) -> Vec<Action> {
        let mut actions = vec![
            Action::SetThemeAttribute(self.mode),
            Action::SwapIcon(IconGlyph::for_mode(self.mode)),
        ];
        if animate {
            actions.push(Action::Tween {
                target: Target::ThemeIcon,
                from: Some(VisualState::settled().with_scale(0.8)),
                to: VisualState::settled().with_rotation(360.0),
                duration: spin_duration,
                easing: Easing::CubicOut,
            });
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spin_count(actions: &[Action]) -> usize {
        actions
            .iter()
            .filter(|action| matches!(action, Action::Tween { .. }))
            .count()
    }

    #[test]
    fn initial_apply_skips_the_transition() {
        let theme = ThemeState::new(true);
        let actions = theme.apply(false, 0.6);
        assert_eq!(spin_count(&actions), 0);
        assert!(actions.contains(&Action::SetThemeAttribute(ThemeMode::Dark)));
        assert!(actions.contains(&Action::SwapIcon(IconGlyph::Sun)));
    }

    #[test]
    fn animated_apply_spins_the_icon() {
        let theme = ThemeState::new(false);
        let actions = theme.apply(true, 0.6);
        assert_eq!(spin_count(&actions), 1);
        assert!(actions.contains(&Action::SwapIcon(IconGlyph::Moon)));
    }

    #[test]
    fn double_toggle_restores_initial_mode() {
        let mut theme = ThemeState::new(true);
        let initial = theme.mode();
        theme.toggle();
        assert_ne!(theme.mode(), initial);
        theme.toggle();
        assert_eq!(theme.mode(), initial);
    }

    #[test]
    fn system_change_overrides_user_toggle() {
        let mut theme = ThemeState::new(true);
        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Light);
        theme.set_from_system(true);
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }
}
