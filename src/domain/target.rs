//! Animated page element identifiers.
//!
//! The page this controller drives has a fixed cast of animated elements. They
//! are modeled as a closed enum rather than selector strings so that timeline
//! steps, effect commands, and tests all reference the same typed set and an
//! invalid reference is unrepresentable.

use crate::domain::ModalId;

/// An animated element on the page.
///
/// Used as the target of timeline steps and one-off effect commands. The host
/// shell maps each variant to the concrete element it owns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The hero headline, first element of the entrance sequence.
    HeroTitle,
    /// The hero subtitle, staggered behind the title.
    HeroSubtitle,
    /// The hero call-to-action, staggered behind the subtitle.
    HeroCta,
    /// The hero content wrapper that blurs and dims behind an open modal.
    HeroContent,
    /// The theme toggle icon (receives the spin transition).
    ThemeIcon,
    /// The shared modal overlay element.
    Overlay,
    /// A modal dialog, identified by its registered id.
    Modal(ModalId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_targets_are_distinguished_by_id() {
        assert_eq!(
            Target::Modal(ModalId::new("pricing")),
            Target::Modal(ModalId::new("pricing"))
        );
        assert_ne!(
            Target::Modal(ModalId::new("pricing")),
            Target::Modal(ModalId::new("contact"))
        );
    }
}
