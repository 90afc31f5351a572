//! Reversible, pausable animation timelines.
//!
//! This module models the timeline primitive the controller builds on: an
//! ordered set of property transitions with relative start offsets, played
//! forward or backward from any position. Timelines are built once (paused)
//! and reused for the life of the page, so a close animation is guaranteed to
//! be the exact inverse of the open animation rather than a separately
//! authored effect that could drift out of sync.
//!
//! # Playback model
//!
//! A timeline has a playhead `position` in seconds, a [`PlayDirection`], and a
//! playing flag. [`Timeline::advance`] moves the playhead by a frame delta and
//! clamps at the ends; [`Timeline::sample`] reads the interpolated
//! [`VisualState`] of a target at the current playhead. Issuing
//! [`Timeline::reverse`] while a forward play is in flight flips direction
//! from the current interpolated position immediately (and [`Timeline::play`]
//! does the same during a reverse), which is what makes rapid open/close
//! double-triggering safe.
//!
//! # Step positioning
//!
//! Steps are placed relative to the step before them:
//!
//! - [`StepPosition::AfterPrevious`]: starts where the previous step ends
//! - [`StepPosition::Before`]: starts the given number of seconds before the
//!   previous step ends (overlapping stagger)
//! - [`StepPosition::WithPrevious`]: starts together with the previous step
//!
//! # Example
//!
//! ```
//! use limelight::domain::Target;
//! use limelight::motion::{
//!     StepPosition, StepSpec, Timeline, TimelineBuilder, VisualState,
//! };
//!
//! let hidden = VisualState::settled().with_opacity(0.0).with_offset_y(30.0);
//! let mut timeline = TimelineBuilder::new(1.2, Default::default())
//!     .step(StepSpec::tween(Target::HeroTitle, hidden, VisualState::settled()).delayed(0.2))
//!     .step(
//!         StepSpec::tween(Target::HeroSubtitle, hidden, VisualState::settled())
//!             .at(StepPosition::Before(0.9)),
//!     )
//!     .build();
//!
//! timeline.play();
//! while !timeline.advance(1.0 / 60.0) {}
//! assert_eq!(timeline.sample(&Target::HeroTitle), Some(VisualState::settled()));
//! ```

use crate::domain::Target;
use crate::motion::{Easing, VisualState};

/// Playback direction of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayDirection {
    /// Playhead moves toward the end of the timeline.
    Forward,
    /// Playhead moves toward the start of the timeline.
    Reverse,
}

/// Placement of a step relative to the previous step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepPosition {
    /// Start when the previous step ends (or at 0 for the first step).
    AfterPrevious,
    /// Start the given number of seconds before the previous step ends,
    /// clamped at 0. Produces the overlapping stagger of the entrance
    /// sequence.
    Before(f32),
    /// Start together with the previous step.
    WithPrevious,
}

/// Declarative description of one timeline step, consumed by the builder.
///
/// Duration and easing are optional; unset fields fall back to the builder's
/// defaults, mirroring how the page declares one default motion style per
/// timeline and overrides it per step only when needed.
#[derive(Debug, Clone)]
pub struct StepSpec {
    /// Element this step animates.
    pub target: Target,
    /// Property state at the step's start.
    pub from: VisualState,
    /// Property state at the step's end.
    pub to: VisualState,
    /// Placement relative to the previous step.
    pub position: StepPosition,
    /// Additional delay in seconds applied after placement.
    pub delay: f32,
    /// Step duration override in seconds.
    pub duration: Option<f32>,
    /// Easing override.
    pub easing: Option<Easing>,
}

impl StepSpec {
    /// Creates a step animating `target` from one state to another, placed
    /// after the previous step with no delay and default duration/easing.
    #[must_use]
    pub fn tween(target: Target, from: VisualState, to: VisualState) -> Self {
        Self {
            target,
            from,
            to,
            position: StepPosition::AfterPrevious,
            delay: 0.0,
            duration: None,
            easing: None,
        }
    }

    /// Sets the step's placement.
    #[must_use]
    pub fn at(mut self, position: StepPosition) -> Self {
        self.position = position;
        self
    }

    /// Adds a delay in seconds after placement.
    #[must_use]
    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Overrides the builder's default duration for this step.
    #[must_use]
    pub fn lasting(mut self, duration: f32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Overrides the builder's default easing for this step.
    #[must_use]
    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// A resolved step with an absolute start time on the timeline.
#[derive(Debug, Clone)]
struct Step {
    target: Target,
    from: VisualState,
    to: VisualState,
    start: f32,
    duration: f32,
    easing: Easing,
}

impl Step {
    fn end(&self) -> f32 {
        self.start + self.duration
    }
}

/// Builder resolving relative step placements into absolute start times.
#[derive(Debug)]
pub struct TimelineBuilder {
    steps: Vec<Step>,
    default_duration: f32,
    default_easing: Easing,
}

impl TimelineBuilder {
    /// Creates a builder with per-timeline defaults for duration and easing.
    #[must_use]
    pub fn new(default_duration: f32, default_easing: Easing) -> Self {
        Self {
            steps: Vec::new(),
            default_duration,
            default_easing,
        }
    }

    /// Appends a step, resolving its placement against the previous step.
    #[must_use]
    pub fn step(mut self, spec: StepSpec) -> Self {
        let (prev_start, prev_end) = self
            .steps
            .last()
            .map_or((0.0, 0.0), |step| (step.start, step.end()));

        let base = match spec.position {
            StepPosition::AfterPrevious => prev_end,
            StepPosition::Before(seconds) => (prev_end - seconds).max(0.0),
            StepPosition::WithPrevious => prev_start,
        };

        self.steps.push(Step {
            target: spec.target,
            from: spec.from,
            to: spec.to,
            start: base + spec.delay,
            duration: spec.duration.unwrap_or(self.default_duration).max(0.0),
            easing: spec.easing.unwrap_or(self.default_easing),
        });
        self
    }

    /// Finalizes the timeline. The result is paused at position 0.
    #[must_use]
    pub fn build(self) -> Timeline {
        let total = self
            .steps
            .iter()
            .map(Step::end)
            .fold(0.0_f32, f32::max);
        Timeline {
            steps: self.steps,
            total,
            position: 0.0,
            direction: PlayDirection::Forward,
            playing: false,
        }
    }
}

/// A composed, reversible, pausable animation timeline.
///
/// Built once via [`TimelineBuilder`], then driven by the host's frame tick
/// through [`Timeline::advance`] and read back through [`Timeline::sample`].
#[derive(Debug, Clone)]
pub struct Timeline {
    steps: Vec<Step>,
    total: f32,
    position: f32,
    direction: PlayDirection,
    playing: bool,
}

impl Timeline {
    /// Starts (or resumes) forward playback from the current position.
    ///
    /// Issued while a reverse play is in flight, this flips direction from the
    /// current interpolated position. A timeline already resting at its end
    /// stays at rest.
    pub fn play(&mut self) {
        self.direction = PlayDirection::Forward;
        self.playing = self.position < self.total;
    }

    /// Starts (or resumes) reverse playback from the current position.
    ///
    /// Issued while a forward play is in flight, this flips direction from the
    /// current interpolated position. A timeline already resting at its start
    /// stays at rest.
    pub fn reverse(&mut self) {
        self.direction = PlayDirection::Reverse;
        self.playing = self.position > 0.0;
    }

    /// Rewinds to position 0 and starts forward playback.
    pub fn restart(&mut self) {
        self.position = 0.0;
        self.direction = PlayDirection::Forward;
        self.playing = self.total > 0.0;
    }

    /// Pauses playback, leaving the playhead where it is.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Moves the playhead by `dt` seconds in the current direction.
    ///
    /// Returns `true` when this tick reached an end of the timeline (the
    /// playhead clamps and playback stops). A paused timeline returns `false`
    /// and does not move.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }
        match self.direction {
            PlayDirection::Forward => {
                self.position = (self.position + dt).min(self.total);
                if self.position >= self.total {
                    self.playing = false;
                    return true;
                }
            }
            PlayDirection::Reverse => {
                self.position = (self.position - dt).max(0.0);
                if self.position <= 0.0 {
                    self.playing = false;
                    return true;
                }
            }
        }
        false
    }

    /// Samples the interpolated state of `target` at the current playhead.
    ///
    /// Returns `None` if no step animates the target. Before a target's first
    /// step begins, its declared `from` state is reported; past a step's end,
    /// its `to` state holds until a later step takes over.
    #[must_use]
    pub fn sample(&self, target: &Target) -> Option<VisualState> {
        let mut state: Option<VisualState> = None;
        for step in self.steps.iter().filter(|step| &step.target == target) {
            if state.is_none() {
                state = Some(step.from);
            }
            if step.duration <= 0.0 {
                if self.position >= step.start {
                    state = Some(step.to);
                }
            } else if self.position >= step.end() {
                state = Some(step.to);
            } else if self.position > step.start {
                let t = (self.position - step.start) / step.duration;
                state = Some(VisualState::ease(step.from, step.to, step.easing, t));
            }
        }
        state
    }

    /// Current playhead position in seconds.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Total duration in seconds (end of the latest-ending step).
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.total
    }

    /// Current playback direction.
    #[must_use]
    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    /// Whether the playhead is currently moving.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the timeline rests at its start (fully hidden state).
    #[must_use]
    pub fn at_rest_start(&self) -> bool {
        !self.playing && self.position <= 0.0
    }

    /// Whether the timeline rests at its end (fully revealed state).
    #[must_use]
    pub fn at_rest_end(&self) -> bool {
        !self.playing && self.position >= self.total
    }

    /// Absolute start times of every step, in declaration order.
    ///
    /// Exposed for setup-time assertions about sequencing.
    #[must_use]
    pub fn step_starts(&self) -> Vec<f32> {
        self.steps.iter().map(|step| step.start).collect()
    }
}
