//! Domain layer for the limelight controller.
//!
//! This module contains the core domain types for the crate, independent of
//! the animation substrate or the controller state machine. It keeps identity
//! and error definitions isolated from the layers that use them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`modal`]: Modal identity type
//! - [`target`]: Closed set of animated page elements
//!
//! # Examples
//!
//! ```
//! use limelight::domain::{ModalId, Result};
//!
//! fn pricing_modal() -> Result<ModalId> {
//!     Ok(ModalId::new("pricing"))
//! }
//! ```

pub mod error;
pub mod modal;
pub mod target;

pub use error::{LimelightError, Result};
pub use modal::ModalId;
pub use target::Target;
