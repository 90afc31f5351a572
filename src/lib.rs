//! Limelight: an interaction controller for animated landing pages.
//!
//! Limelight owns the interactive behavior of a single page: the staggered
//! hero entrance animation, dark/light theme switching that tracks the system
//! preference, and a single-concurrency modal lifecycle with symmetric
//! open/close animations and a blurred backdrop. The animation engine, the
//! document tree, and the markup are external collaborators; the controller
//! models reversible timelines internally and emits declarative effect
//! commands for the host shell to apply.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Shell (event plumbing + rendering)            │  ← Out of scope
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Lifecycle rules
//! │  - Action emission                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Stage Layer   │   │ Theme Layer   │   │ Motion Layer  │
//! │ (stage/)      │   │ (theme/)      │   │ (motion/)     │
//! │ - Registry    │   │ - Mode state  │   │ - Timelines   │
//! │ - Entrance    │   │ - Icon glyphs │   │ - Easing      │
//! │ - Triggers    │   │ - Apply ops   │   │ - Tween state │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Observability Layers                      │
//! │  - Modal ids, targets, errors (domain/)             │
//! │  - Tracing setup (observability/)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller state machine with event/action model
//! - [`domain`]: Core domain types (ids, targets, errors)
//! - [`motion`]: Reversible timelines, easing, animatable properties
//! - [`stage`]: Modal registry, entrance sequence, trigger bindings
//! - [`theme`]: Theme state and icon glyphs
//! - [`observability`]: Tracing subscriber setup
//!
//! # Initialization Flow
//!
//! 1. The host loads or defaults a [`Config`] and calls [`initialize`] with
//!    the queried system dark-preference. This builds one paused reversible
//!    timeline per declared modal (duplicates fail fast) and the entrance
//!    timeline.
//! 2. The host binds its markup trigger elements through a
//!    [`stage::TriggerMap`], which validates modal references at bind time.
//! 3. On page load the host dispatches [`app::Event::PageLoaded`]: the
//!    initial theme applies without a transition and the entrance sequence
//!    starts.
//! 4. Each frame the host calls [`app::PageState::advance`] and samples
//!    timelines to paint; each fired trigger resolves to an
//!    [`app::Event`] handled by [`app::handle_event`], whose returned
//!    [`app::Action`]s the host executes.
//!
//! # Example
//!
//! ```
//! use limelight::app::{handle_event, Event};
//! use limelight::domain::{ModalId, Target};
//! use limelight::{initialize, Config};
//!
//! let config = Config {
//!     modals: vec![ModalId::new("pricing"), ModalId::new("contact")],
//!     ..Config::default()
//! };
//! let mut state = initialize(&config, true).unwrap();
//!
//! let _ = handle_event(&mut state, &Event::PageLoaded);
//! let _ = handle_event(&mut state, &Event::OpenRequested(ModalId::new("pricing")));
//! assert!(state.modal_open_marker());
//!
//! // Drive the open animation to completion.
//! for _ in 0..60 {
//!     state.advance(1.0 / 60.0);
//! }
//! let modal = state.sample(&Target::Modal(ModalId::new("pricing"))).unwrap();
//! assert_eq!(modal.opacity, 1.0);
//! ```
//!
//! # Key Design Decisions
//!
//! ## Pre-built timelines
//!
//! Modal timelines are built once at startup, paused, and reused: repeated
//! opens and closes allocate nothing, and the close animation is the same
//! timeline played backward, so reveal and un-reveal can never drift apart.
//!
//! ## Centralized lifecycle mutation
//!
//! The open-modal value is mutated only inside
//! [`app::PageState::request_open`] and [`app::PageState::request_close`].
//! Open buttons, close buttons, the overlay, and Escape all funnel through
//! those two methods via the event handler, and the UI thread processes one
//! event at a time, so no race on the shared value is possible.
//!
//! ## Layered backdrop effect
//!
//! The backdrop blur/dim is a one-off tween layered under the modal
//! animation rather than baked into each modal's timeline, so every modal
//! shares the same background treatment.

pub mod app;
pub mod domain;
pub mod motion;
pub mod observability;
pub mod stage;
pub mod theme;

pub use app::{handle_event, Action, Event, ModalLifecycle, PageState};
pub use domain::{LimelightError, ModalId, Result, Target};

use crate::motion::Easing;
use crate::motion::VisualState;
use crate::stage::{EntranceSequence, ModalRegistry};
use crate::theme::ThemeState;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Motion durations and sequencing parameters, in seconds.
///
/// Defaults mirror the page's authored motion: a 1.2s entrance step with a
/// 0.9s overlap between staggered elements, a 0.6s modal pop, a 0.5s
/// backdrop transition, and a 0.6s icon spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Duration of each entrance step.
    pub entrance_duration: f32,
    /// Delay before the first entrance step.
    pub entrance_delay: f32,
    /// How far each staggered entrance step overlaps the previous one.
    pub entrance_overlap: f32,
    /// Duration of a modal's reveal (and, reversed, its hide).
    pub modal_duration: f32,
    /// Duration of the backdrop blur/dim transition.
    pub backdrop_duration: f32,
    /// Duration of the theme icon spin.
    pub icon_spin_duration: f32,
}

impl MotionSettings {
    /// The default easing for composed timelines.
    #[must_use]
    pub const fn default_easing(&self) -> Easing {
        Easing::QuintOut
    }
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            entrance_duration: 1.2,
            entrance_delay: 0.2,
            entrance_overlap: 0.9,
            modal_duration: 0.6,
            backdrop_duration: 0.5,
            icon_spin_duration: 0.6,
        }
    }
}

/// Backdrop treatment applied to the hero content behind an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropSettings {
    /// Blur radius while a modal is open.
    pub blur: f32,
    /// Opacity the hero content dims to while a modal is open.
    pub dim: f32,
}

impl BackdropSettings {
    /// The visual state the hero content is driven toward while a modal is
    /// open.
    #[must_use]
    pub const fn blurred_state(&self) -> VisualState {
        VisualState::settled()
            .with_blur(self.blur)
            .with_opacity(self.dim)
    }
}

impl Default for BackdropSettings {
    fn default() -> Self {
        Self { blur: 5.0, dim: 0.5 }
    }
}

/// Controller configuration.
///
/// Declares the page's modal identifiers and motion parameters. Loadable
/// from TOML; any omitted field falls back to its default.
///
/// # TOML Format
///
/// ```toml
/// modals = ["pricing", "contact"]
/// trace_level = "debug"
///
/// [motion]
/// modal_duration = 0.6
/// entrance_overlap = 0.9
///
/// [backdrop]
/// blur = 5.0
/// dim = 0.5
/// ```
///
/// # Example
///
/// ```
/// use limelight::{Config, ModalId};
///
/// let config = Config::from_toml_str(r#"modals = ["pricing"]"#).unwrap();
/// assert_eq!(config.modals, vec![ModalId::new("pricing")]);
/// assert_eq!(config.motion.modal_duration, 0.6);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identifiers of the modals declared in markup.
    ///
    /// Each is registered exactly once at initialization; duplicates are a
    /// setup error.
    pub modals: Vec<ModalId>,

    /// Motion durations and sequencing parameters.
    pub motion: MotionSettings,

    /// Backdrop blur/dim treatment.
    pub backdrop: BackdropSettings,

    /// Tracing level for the observability pipeline.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`LimelightError::ConfigParse`] if the TOML is malformed.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LimelightError::Io`] if the file cannot be read, or
    /// [`LimelightError::ConfigParse`] if its content is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Builds page state from configuration and the queried system preference.
///
/// Registers one paused reversible timeline per declared modal, builds the
/// entrance sequence, and seeds theme state from `prefers_dark`. The first
/// theme application happens when the host dispatches
/// [`app::Event::PageLoaded`], so nothing is painted from here.
///
/// # Errors
///
/// Returns [`LimelightError::Registry`] if the configuration declares the
/// same modal id twice.
///
/// # Example
///
/// ```
/// use limelight::{initialize, Config, ModalId};
///
/// let config = Config {
///     modals: vec![ModalId::new("pricing")],
///     ..Config::default()
/// };
/// let state = initialize(&config, false).unwrap();
/// assert_eq!(state.registry().len(), 1);
/// ```
pub fn initialize(config: &Config, prefers_dark: bool) -> Result<PageState> {
    tracing::debug!(
        modals = config.modals.len(),
        prefers_dark,
        "initializing page controller"
    );

    let mut registry = ModalRegistry::new();
    for id in &config.modals {
        registry.register(id.clone(), config.motion.modal_duration)?;
    }

    let entrance = EntranceSequence::new(&config.motion);
    let theme = ThemeState::new(prefers_dark);

    Ok(PageState::new(
        registry,
        entrance,
        theme,
        config.motion,
        config.backdrop,
    ))
}
