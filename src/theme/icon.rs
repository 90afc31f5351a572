//! Theme toggle icon glyphs.
//!
//! The toggle icon represents the *action* the button performs, not the
//! current state: in dark mode it shows the sun ("switch to light"), in light
//! mode the moon ("switch to dark"). The two path literals are fixed SVG path
//! data swapped into the icon element by the host.

use crate::theme::ThemeMode;

/// SVG path data for the sun glyph.
const SUN_PATH: &str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";

/// SVG path data for the moon glyph.
const MOON_PATH: &str = "M21 12.79A9 9 0 1111.21 3 7 7 0 0021 12.79z";

/// The two glyphs the theme toggle icon can show.
///
/// # Examples
///
/// ```
/// use limelight::theme::{IconGlyph, ThemeMode};
///
/// assert_eq!(IconGlyph::for_mode(ThemeMode::Dark), IconGlyph::Sun);
/// assert!(IconGlyph::Moon.path_data().starts_with("M21"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGlyph {
    /// Sun glyph, shown while dark mode is active.
    Sun,
    /// Moon glyph, shown while light mode is active.
    Moon,
}

impl IconGlyph {
    /// Returns the glyph advertising the switch away from `mode`.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::Sun,
            ThemeMode::Light => Self::Moon,
        }
    }

    /// The glyph's SVG path data.
    #[must_use]
    pub const fn path_data(self) -> &'static str {
        match self {
            Self::Sun => SUN_PATH,
            Self::Moon => MOON_PATH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_advertises_the_opposite_mode() {
        assert_eq!(IconGlyph::for_mode(ThemeMode::Dark), IconGlyph::Sun);
        assert_eq!(IconGlyph::for_mode(ThemeMode::Light), IconGlyph::Moon);
    }

    #[test]
    fn path_data_is_distinct_per_glyph() {
        assert_ne!(IconGlyph::Sun.path_data(), IconGlyph::Moon.path_data());
    }
}
