//! Easing curves for interpolated transitions.
//!
//! The controller uses a small family of power-out curves: motion launches
//! fast and settles softly, which is the texture of the whole page (entrance,
//! modal pop, icon spin). All curves are monotone on `[0, 1]` and pass through
//! the endpoints exactly, so a transition driven to completion lands on its
//! target state and a reversed transition lands back on its origin.

/// An easing curve mapping normalized time to normalized progress.
///
/// # Examples
///
/// ```
/// use limelight::motion::Easing;
///
/// assert_eq!(Easing::QuintOut.apply(0.0), 0.0);
/// assert_eq!(Easing::QuintOut.apply(1.0), 1.0);
/// assert!(Easing::QuintOut.apply(0.5) > Easing::Linear.apply(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Quadratic deceleration; used for the backdrop blur transition.
    QuadOut,
    /// Cubic deceleration; used for the theme icon spin.
    CubicOut,
    /// Quintic deceleration; the default for entrance and modal timelines.
    #[default]
    QuintOut,
}

impl Easing {
    /// Evaluates the curve at normalized time `t`.
    ///
    /// Input is clamped to `[0, 1]`, so callers sampling slightly past a
    /// step's span still read the exact endpoint value.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::QuadOut => 1.0 - inv * inv,
            Self::CubicOut => 1.0 - inv * inv * inv,
            Self::QuintOut => 1.0 - inv * inv * inv * inv * inv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 4] = [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicOut,
        Easing::QuintOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
            assert_eq!(curve.apply(1.0), 1.0, "{curve:?} at 1");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for curve in CURVES {
            assert_eq!(curve.apply(-0.5), 0.0);
            assert_eq!(curve.apply(1.5), 1.0);
        }
    }

    #[test]
    fn curves_are_monotone() {
        for curve in CURVES {
            let mut prev = 0.0;
            for i in 1..=100 {
                let value = curve.apply(i as f32 / 100.0);
                assert!(value >= prev, "{curve:?} decreased at step {i}");
                prev = value;
            }
        }
    }

    #[test]
    fn higher_powers_decelerate_harder() {
        // At the midpoint each deeper curve has covered more of its distance.
        let mid: Vec<f32> = CURVES.iter().map(|c| c.apply(0.5)).collect();
        assert!(mid[0] < mid[1] && mid[1] < mid[2] && mid[2] < mid[3]);
    }
}
