// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state machine.
//!
//! Mouse, touch and pen input are adapted (see [`crate::ui::input`]) into one
//! stream of [`PointerEvent`]s. The navigator turns that stream into
//! navigation intents:
//!
//! ```text
//! Idle --down--> Armed --move |dx| > |dy|--> Committed
//!  ^               |                             |
//!  +------up (tap)-+          up / cancel -------+
//! ```
//!
//! A release navigates when the drag went far enough (80 px) *or* fast enough
//! (0.5 px/ms), so both a short flick and a slow long drag succeed.

use crate::domain::NavigationDirection;
use iced::Point;
use std::time::Instant;

/// Horizontal travel (px) past which a release navigates.
pub const DISTANCE_THRESHOLD: f32 = 80.0;

/// Horizontal speed (px/ms) past which a release navigates.
pub const VELOCITY_THRESHOLD: f32 = 0.5;

/// Device-independent pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point, at: Instant },
    Move { position: Point, at: Instant },
    Up { position: Point, at: Instant },
    /// The system took the pointer away (capture lost, touch cancelled).
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No pointer is down.
    Idle,
    /// A pointer is down but the movement is not yet a horizontal drag.
    Armed,
    /// The drag is a horizontal swipe; the card follows the pointer.
    Committed,
}

/// Outcome of a committed release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Navigate(NavigationDirection),
    SnapBack,
}

/// Decides what a release does. Checked in order: a rightward drag goes to the
/// previous card, a leftward drag to the next one, anything else snaps back.
#[must_use]
pub fn classify_release(dx: f32, velocity: f32) -> Release {
    if dx > DISTANCE_THRESHOLD || velocity > VELOCITY_THRESHOLD {
        Release::Navigate(NavigationDirection::Previous)
    } else if dx < -DISTANCE_THRESHOLD || velocity < -VELOCITY_THRESHOLD {
        Release::Navigate(NavigationDirection::Next)
    } else {
        Release::SnapBack
    }
}

/// What the card view must do after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEffect {
    None,
    /// A pointer went down: stop any running transition so tracking is immediate.
    Arm,
    /// Committed drag: the container sits at `translate`
    /// (settled offset + `displacement`). Native scrolling stays suppressed.
    Follow { translate: f32, displacement: f32 },
    /// Go one card in `direction`; the drag ended `displacement` px from rest.
    Navigate {
        direction: NavigationDirection,
        displacement: f32,
    },
    /// Animate back to the settled offset from `displacement`.
    SnapBack { displacement: f32 },
    /// Down/up without a horizontal drag.
    Tap { position: Point },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Session {
    start: Point,
    started_at: Instant,
    /// Horizontal displacement of the latest committed move.
    displacement: f32,
    committed: bool,
}

/// The gesture state machine for one card container.
///
/// At most one pointer session is active; a second `Down` while a session is
/// running is ignored.
#[derive(Debug, Clone, Default)]
pub struct GestureNavigator {
    session: Option<Session>,
    /// Offset the container sat at when the current session started.
    settled_translate: f32,
}

impl GestureNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.session {
            None => Phase::Idle,
            Some(Session {
                committed: false, ..
            }) => Phase::Armed,
            Some(Session {
                committed: true, ..
            }) => Phase::Committed,
        }
    }

    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.phase() == Phase::Committed
    }

    #[must_use]
    pub fn settled_translate(&self) -> f32 {
        self.settled_translate
    }

    /// Records the container offset that drags start from.
    pub fn settle(&mut self, translate: f32) {
        self.settled_translate = translate;
    }

    /// Feeds one pointer event through the state machine.
    pub fn handle(&mut self, event: PointerEvent) -> GestureEffect {
        match event {
            PointerEvent::Down { position, at } => self.pointer_down(position, at),
            PointerEvent::Move { position, .. } => self.pointer_move(position),
            PointerEvent::Up { position, at } => self.pointer_up(position, at),
            PointerEvent::Cancel => self.cancel(),
        }
    }

    fn pointer_down(&mut self, position: Point, at: Instant) -> GestureEffect {
        if self.session.is_some() {
            return GestureEffect::None;
        }
        self.session = Some(Session {
            start: position,
            started_at: at,
            displacement: 0.0,
            committed: false,
        });
        GestureEffect::Arm
    }

    fn pointer_move(&mut self, position: Point) -> GestureEffect {
        let Some(session) = self.session.as_mut() else {
            return GestureEffect::None;
        };

        let dx = position.x - session.start.x;
        let dy = position.y - session.start.y;

        if !session.committed {
            if dx.abs() <= dy.abs() {
                return GestureEffect::None;
            }
            session.committed = true;
            tracing::debug!(dx, dy, "swipe committed");
        }

        session.displacement = dx;
        GestureEffect::Follow {
            translate: self.settled_translate + dx,
            displacement: dx,
        }
    }

    fn pointer_up(&mut self, position: Point, at: Instant) -> GestureEffect {
        let Some(session) = self.session.take() else {
            return GestureEffect::None;
        };

        if !session.committed {
            return GestureEffect::Tap { position };
        }

        let dx = position.x - session.start.x;
        let elapsed_ms = at.saturating_duration_since(session.started_at).as_secs_f32() * 1000.0;
        let velocity = if elapsed_ms > 0.0 { dx / elapsed_ms } else { 0.0 };

        match classify_release(dx, velocity) {
            Release::Navigate(direction) => {
                tracing::debug!(dx, velocity, ?direction, "swipe navigates");
                GestureEffect::Navigate {
                    direction,
                    displacement: dx,
                }
            }
            Release::SnapBack => GestureEffect::SnapBack { displacement: dx },
        }
    }

    fn cancel(&mut self) -> GestureEffect {
        match self.session.take() {
            Some(session) => GestureEffect::SnapBack {
                displacement: if session.committed {
                    session.displacement
                } else {
                    0.0
                },
            },
            None => GestureEffect::None,
        }
    }
}
