//! Page furniture: registry, entrance sequencing, and trigger bindings.
//!
//! This layer holds everything built once when the page is wired up and then
//! reused for its whole life:
//!
//! - [`registry`]: one paused reversible timeline per modal
//! - [`entrance`]: the staggered hero entrance timeline
//! - [`triggers`]: the dispatch table binding markup trigger sources to
//!   controller events
//!
//! All validation (duplicate modal ids, bindings naming unknown modals,
//! rebound trigger sources) happens here at setup, which is what lets the
//! controller treat every runtime request as a total function.

pub mod entrance;
pub mod registry;
pub mod triggers;

pub use entrance::EntranceSequence;
pub use registry::ModalRegistry;
pub use triggers::TriggerMap;
