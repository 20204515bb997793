// SPDX-License-Identifier: MPL-2.0
//! Horizontal slide state of the card container.
//!
//! The visual offset is stored as a displacement from the resting position of
//! the current card, so `0.0` means "settled". Transitions animate the
//! displacement back to zero.

use crate::ui::easing::{CubicBezier, EASE, SNAP_BACK};
use std::time::{Duration, Instant};

/// Duration of the slide after a successful navigation.
pub const NAVIGATE_DURATION: Duration = Duration::from_millis(300);

/// Duration of the snap-back after an aborted drag.
pub const SNAP_BACK_DURATION: Duration = Duration::from_millis(200);

/// The animation style applied when returning to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// A new card slides in.
    Navigate,
    /// The current card returns after a drag that did not navigate.
    SnapBack,
}

impl TransitionKind {
    fn duration(self) -> Duration {
        match self {
            TransitionKind::Navigate => NAVIGATE_DURATION,
            TransitionKind::SnapBack => SNAP_BACK_DURATION,
        }
    }

    fn curve(self) -> CubicBezier {
        match self {
            TransitionKind::Navigate => EASE,
            TransitionKind::SnapBack => SNAP_BACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    kind: TransitionKind,
    from: f32,
    started_at: Instant,
}

impl Transition {
    fn value_at(&self, now: Instant) -> f32 {
        let duration = self.kind.duration().as_secs_f32();
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        let progress = if duration > 0.0 { elapsed / duration } else { 1.0 };
        self.from * (1.0 - self.kind.curve().apply(progress))
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.kind.duration()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideState {
    displacement: f32,
    transition: Option<Transition>,
}

impl SlideState {
    /// Current displacement (as of the last tick).
    #[must_use]
    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    #[must_use]
    pub fn transition_kind(&self) -> Option<TransitionKind> {
        self.transition.map(|t| t.kind)
    }

    /// Drops any running transition, keeping the displacement reached so far.
    pub fn halt(&mut self, now: Instant) {
        if let Some(transition) = self.transition.take() {
            self.displacement = transition.value_at(now);
        }
    }

    /// Places the container at `displacement` with no transition.
    pub fn track(&mut self, displacement: f32) {
        self.transition = None;
        self.displacement = displacement;
    }

    /// Animates from `from` back to rest.
    pub fn return_to_rest(&mut self, from: f32, kind: TransitionKind, now: Instant) {
        self.displacement = from;
        self.transition = (from != 0.0).then_some(Transition {
            kind,
            from,
            started_at: now,
        });
    }

    /// Jumps to rest with no animation.
    pub fn reset(&mut self) {
        self.track(0.0);
    }

    /// Advances the running transition. Returns `true` while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        if transition.is_finished(now) {
            self.transition = None;
            self.displacement = 0.0;
            return false;
        }
        self.displacement = transition.value_at(now);
        true
    }
}
