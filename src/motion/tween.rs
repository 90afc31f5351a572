//! Animatable visual properties.
//!
//! This module defines [`VisualState`], the set of properties the page
//! animates (opacity, vertical offset, scale, blur radius, rotation). A
//! timeline step or one-off tween is a pair of `VisualState` endpoints; the
//! host shell maps sampled values onto whatever style mechanism it uses.
//!
//! Values are plain numbers rather than engine-specific units: opacity and
//! scale are unitless factors, offset and blur are in the host's length units,
//! rotation is in degrees.

use crate::motion::Easing;

/// A snapshot of an element's animatable properties.
///
/// `VisualState` is a value type: endpoints are captured when a timeline or
/// tween is built and never mutated afterwards, which is what makes reversed
/// playback land exactly on the original rest state.
///
/// # Examples
///
/// ```
/// use limelight::motion::VisualState;
///
/// let hidden = VisualState::settled().with_opacity(0.0).with_offset_y(30.0);
/// let mid = VisualState::lerp(hidden, VisualState::settled(), 0.5);
/// assert_eq!(mid.opacity, 0.5);
/// assert_eq!(mid.offset_y, 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Element opacity in `[0, 1]`.
    pub opacity: f32,
    /// Vertical offset from the element's settled position.
    pub offset_y: f32,
    /// Uniform scale factor (1.0 = natural size).
    pub scale: f32,
    /// Blur radius applied to the element.
    pub blur: f32,
    /// Rotation in degrees.
    pub rotation: f32,
}

impl VisualState {
    /// The neutral at-rest state: fully opaque, unshifted, unscaled, sharp.
    #[must_use]
    pub const fn settled() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
            scale: 1.0,
            blur: 0.0,
            rotation: 0.0,
        }
    }

    /// Returns a copy with the given opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Returns a copy with the given vertical offset.
    #[must_use]
    pub const fn with_offset_y(mut self, offset_y: f32) -> Self {
        self.offset_y = offset_y;
        self
    }

    /// Returns a copy with the given scale factor.
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Returns a copy with the given blur radius.
    #[must_use]
    pub const fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    /// Returns a copy with the given rotation in degrees.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Linearly interpolates every property between two states.
    ///
    /// `t` is clamped to `[0, 1]`; `t = 0` yields `from` exactly and `t = 1`
    /// yields `to` exactly.
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            opacity: mix(from.opacity, to.opacity),
            offset_y: mix(from.offset_y, to.offset_y),
            scale: mix(from.scale, to.scale),
            blur: mix(from.blur, to.blur),
            rotation: mix(from.rotation, to.rotation),
        }
    }

    /// Interpolates with an easing curve applied to `t`.
    #[must_use]
    pub fn ease(from: Self, to: Self, easing: Easing, t: f32) -> Self {
        Self::lerp(from, to, easing.apply(t))
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::settled()
    }
}
