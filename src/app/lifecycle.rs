//! Modal lifecycle state machine types.
//!
//! The whole modal system reduces to a two-state-family machine: either no
//! modal is open, or exactly one is. There is no terminal state; the page
//! lives in this machine indefinitely.
//!
//! # State Machine
//!
//! - `Closed` → `Open(id)` via an open request naming a registered modal
//! - `Open(id)` → `Closed` via any close request
//! - Everything else is a silent no-op: opening while open (any id, including
//!   the same one), closing while closed, opening an unknown id
//!
//! The value is mutated only by the two lifecycle methods on
//! [`PageState`](crate::app::PageState), which preserves the single-writer
//! invariant across however many trigger sources feed the controller.

use crate::domain::ModalId;

/// Which modal, if any, is currently open.
///
/// # Examples
///
/// ```
/// use limelight::app::ModalLifecycle;
/// use limelight::domain::ModalId;
///
/// let state = ModalLifecycle::Open(ModalId::new("pricing"));
/// assert!(state.is_open());
/// assert_eq!(state.open_id().map(|id| id.as_str()), Some("pricing"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalLifecycle {
    /// No modal is open.
    #[default]
    Closed,
    /// Exactly one modal is open.
    Open(ModalId),
}

impl ModalLifecycle {
    /// Whether any modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The open modal's id, if any.
    #[must_use]
    pub const fn open_id(&self) -> Option<&ModalId> {
        match self {
            Self::Open(id) => Some(id),
            Self::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed() {
        assert_eq!(ModalLifecycle::default(), ModalLifecycle::Closed);
        assert!(!ModalLifecycle::Closed.is_open());
        assert!(ModalLifecycle::Closed.open_id().is_none());
    }

    #[test]
    fn open_state_carries_its_id() {
        let state = ModalLifecycle::Open(ModalId::new("contact"));
        assert!(state.is_open());
        assert_eq!(state.open_id(), Some(&ModalId::new("contact")));
    }
}
