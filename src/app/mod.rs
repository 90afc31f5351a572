//! Application layer coordinating state, events, and actions.
//!
//! This module defines the controller logic layer, sitting between the host
//! shell (event plumbing and rendering, out of scope) and the stage, motion,
//! and theme layers. It implements the event-driven architecture that powers
//! the page's interactions.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Trigger Events → Event Handler → State Mutations → Actions → Host Effects
//!                        │
//!                        └── timelines driven by PageState::advance, read
//!                            back by the host via sampling
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Effect commands emitted by the event handler
//! - [`handler`]: Event processing and dispatch
//! - [`lifecycle`]: The modal lifecycle state machine value
//! - [`state`]: Central page state container and lifecycle transitions
//!
//! # Example
//!
//! ```
//! use limelight::app::{handle_event, Event};
//! use limelight::domain::ModalId;
//! use limelight::{initialize, Config};
//!
//! let config = Config {
//!     modals: vec![ModalId::new("pricing")],
//!     ..Config::default()
//! };
//! let mut state = initialize(&config, true).unwrap();
//! let _ = handle_event(&mut state, &Event::PageLoaded);
//! let _ = handle_event(&mut state, &Event::OpenRequested(ModalId::new("pricing")));
//! assert!(state.modal_open_marker());
//! ```

pub mod actions;
pub mod handler;
pub mod lifecycle;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use lifecycle::ModalLifecycle;
pub use state::PageState;
