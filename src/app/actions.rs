//! Actions representing effects to be executed by the host shell.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing a trigger. Actions bridge the pure
//! state transitions inside the controller and the effectful operations the
//! host performs against the real page: instantaneous property assignment,
//! one-off interpolated tweens, attribute mutation, and icon path swapping.
//!
//! Timeline playback is deliberately not an action: timelines live inside
//! [`PageState`](crate::app::PageState) and the host reads them back by
//! sampling each frame after calling `advance`. Actions cover only the
//! effects that have no timeline to sample.
//!
//! # Example
//!
//! ```
//! use limelight::app::Action;
//! use limelight::domain::Target;
//! use limelight::motion::VisualState;
//!
//! let reset = Action::Set {
//!     target: Target::HeroTitle,
//!     state: VisualState::settled().with_opacity(0.0).with_offset_y(30.0),
//! };
//! ```

use crate::domain::Target;
use crate::motion::{Easing, VisualState};
use crate::theme::{IconGlyph, ThemeMode};

/// Commands representing effects to be executed by the host shell.
///
/// Produced by the event handler and the lifecycle methods, executed by the
/// host in sequence. They represent the boundary between state transitions
/// and mutations of the real page.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Assigns an element's visual properties instantly, without animation.
    ///
    /// Used to pin hero elements to their pre-animation state before the
    /// entrance sequence (re)plays.
    Set {
        /// Element to mutate.
        target: Target,
        /// Properties to assign.
        state: VisualState,
    },

    /// Plays a one-off interpolated transition.
    ///
    /// Used for the effects layered outside the registered timelines: the
    /// backdrop blur/dim behind an open modal and the theme icon spin.
    Tween {
        /// Element to animate.
        target: Target,
        /// Explicit starting state; `None` animates from wherever the
        /// element currently is.
        from: Option<VisualState>,
        /// Ending state.
        to: VisualState,
        /// Transition length in seconds.
        duration: f32,
        /// Easing curve.
        easing: Easing,
    },

    /// Writes the persisted page theme attribute.
    SetThemeAttribute(ThemeMode),

    /// Swaps the theme icon's path data to the given glyph.
    SwapIcon(IconGlyph),

    /// Sets or clears the page-level "modal-open" marker that scopes global
    /// interaction and scroll styling.
    MarkModalOpen(bool),
}
