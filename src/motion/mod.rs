//! Animation-orchestration substrate.
//!
//! This layer models the declarative primitives the page's animation engine
//! provides: instantaneous property assignment, interpolated one-off tweens,
//! and composed reversible timelines with relative start offsets. The
//! controller builds timelines here once at startup and drives them through
//! the host's frame tick; it never constructs animations per interaction.
//!
//! # Modules
//!
//! - [`easing`]: Power-out easing curves
//! - [`tween`]: [`VisualState`], the animatable property set
//! - [`timeline`]: Reversible, pausable, samplable timelines
//!
//! # Example
//!
//! ```
//! use limelight::domain::Target;
//! use limelight::motion::{Easing, StepSpec, TimelineBuilder, VisualState};
//!
//! let mut timeline = TimelineBuilder::new(0.6, Easing::QuintOut)
//!     .step(StepSpec::tween(
//!         Target::Overlay,
//!         VisualState::settled().with_opacity(0.0),
//!         VisualState::settled(),
//!     ))
//!     .build();
//!
//! timeline.play();
//! timeline.advance(0.3);
//! assert!(timeline.sample(&Target::Overlay).unwrap().opacity > 0.0);
//! ```

pub mod easing;
pub mod timeline;
pub mod tween;

pub use easing::Easing;
pub use timeline::{PlayDirection, StepPosition, StepSpec, Timeline, TimelineBuilder};
pub use tween::VisualState;
