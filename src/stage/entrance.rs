//! Hero entrance sequencing.
//!
//! A single composed timeline fades and slides the hero title, subtitle, and
//! call-to-action into place. The three steps are staggered rather than fully
//! sequential: each later step starts a fixed overlap before the previous one
//! ends, which keeps the sequence feeling fluid instead of mechanical.
//!
//! The sequence plays once on page load and again on the explicit refresh
//! trigger. A restart must first reset the elements to their pre-animation
//! state (invisible, offset downward); replaying from a finished timeline
//! without the reset would be a visual no-op.

use crate::app::Action;
use crate::domain::Target;
use crate::motion::{StepPosition, StepSpec, Timeline, TimelineBuilder, VisualState};
use crate::MotionSettings;

/// Vertical offset of hero elements before they slide into place.
const ENTRANCE_OFFSET_Y: f32 = 30.0;

/// The one-shot, restartable hero entrance timeline.
#[derive(Debug, Clone)]
pub struct EntranceSequence {
    timeline: Timeline,
}

impl EntranceSequence {
    /// The three hero elements, in sequence order.
    pub const TARGETS: [Target; 3] = [Target::HeroTitle, Target::HeroSubtitle, Target::HeroCta];

    /// Pre-animation state of every hero element.
    #[must_use]
    pub const fn hidden_state() -> VisualState {
        VisualState::settled()
            .with_opacity(0.0)
            .with_offset_y(ENTRANCE_OFFSET_Y)
    }

    /// Builds the entrance timeline from the configured motion settings.
    ///
    /// The title starts after a short delay; the subtitle and call-to-action
    /// each start `entrance_overlap` seconds before the step ahead of them
    /// ends.
    #[must_use]
    pub fn new(motion: &MotionSettings) -> Self {
        let hidden = Self::hidden_state();
        let settled = VisualState::settled();

        let timeline = TimelineBuilder::new(motion.entrance_duration, motion.default_easing())
            .step(StepSpec::tween(Target::HeroTitle, hidden, settled).delayed(motion.entrance_delay))
            .step(
                StepSpec::tween(Target::HeroSubtitle, hidden, settled)
                    .at(StepPosition::Before(motion.entrance_overlap)),
            )
            .step(
                StepSpec::tween(Target::HeroCta, hidden, settled)
                    .at(StepPosition::Before(motion.entrance_overlap)),
            )
            .build();

        Self { timeline }
    }

    /// Emits the pre-animation reset and starts the first play.
    ///
    /// The reset pins all three elements to the hidden state instantly so the
    /// markup's natural appearance never flashes before the animation. Called
    /// once on page load.
    #[must_use]
    pub fn play(&mut self) -> Vec<Action> {
        let actions = self.reset_actions();
        self.timeline.restart();
        tracing::debug!("entrance sequence started");
        actions
    }

    /// Resets the elements and replays the sequence from the top.
    ///
    /// Identical to the first play by construction; exposed separately so the
    /// refresh trigger reads as a restart at call sites.
    #[must_use]
    pub fn restart(&mut self) -> Vec<Action> {
        tracing::debug!(
            position = self.timeline.position(),
            "entrance sequence restarted"
        );
        let actions = self.reset_actions();
        self.timeline.restart();
        actions
    }

    /// Advances the timeline by `dt` seconds. Returns `true` on completion.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.timeline.advance(dt)
    }

    /// Samples a hero element's interpolated state at the current playhead.
    #[must_use]
    pub fn sample(&self, target: &Target) -> Option<VisualState> {
        self.timeline.sample(target)
    }

    /// The underlying timeline (read-only).
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    fn reset_actions(&self) -> Vec<Action> {
        Self::TARGETS
            .iter()
            .map(|target| Action::Set {
                target: target.clone(),
                state: Self::hidden_state(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn sequence() -> EntranceSequence {
        EntranceSequence::new(&MotionSettings::default())
    }

    fn run_to_completion(sequence: &mut EntranceSequence) {
        for _ in 0..10_000 {
            if sequence.advance(FRAME) {
                return;
            }
        }
        panic!("entrance sequence did not finish");
    }

    #[test]
    fn play_resets_all_three_elements() {
        let mut sequence = sequence();
        let actions = sequence.play();
        assert_eq!(actions.len(), 3);
        for action in &actions {
            assert!(matches!(
                action,
                Action::Set { state, .. } if *state == EntranceSequence::hidden_state()
            ));
        }
        assert!(sequence.timeline().is_playing());
    }

    #[test]
    fn completed_play_settles_every_element() {
        let mut sequence = sequence();
        let _ = sequence.play();
        run_to_completion(&mut sequence);
        for target in &EntranceSequence::TARGETS {
            assert_eq!(sequence.sample(target), Some(VisualState::settled()));
        }
    }

    #[test]
    fn restart_after_completion_replays_to_the_same_end_state() {
        let mut sequence = sequence();
        let _ = sequence.play();
        run_to_completion(&mut sequence);

        let actions = sequence.restart();
        assert_eq!(actions.len(), 3);
        assert_eq!(sequence.timeline().position(), 0.0);
        assert!(sequence.timeline().is_playing());

        run_to_completion(&mut sequence);
        for target in &EntranceSequence::TARGETS {
            assert_eq!(sequence.sample(target), Some(VisualState::settled()));
        }
    }

    #[test]
    fn subtitle_lags_title_and_leads_cta() {
        let mut sequence = sequence();
        let _ = sequence.play();
        // Past the title's start but before the subtitle fully catches up.
        for _ in 0..30 {
            let _ = sequence.advance(FRAME);
        }
        let title = sequence.sample(&Target::HeroTitle).unwrap();
        let subtitle = sequence.sample(&Target::HeroSubtitle).unwrap();
        let cta = sequence.sample(&Target::HeroCta).unwrap();
        assert!(title.opacity >= subtitle.opacity);
        assert!(subtitle.opacity >= cta.opacity);
        assert!(title.opacity > 0.0);
    }
}
