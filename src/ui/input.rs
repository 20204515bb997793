// SPDX-License-Identifier: MPL-2.0
//! Adapts raw iced events into the gallery's input stream.
//!
//! Mouse and touch events become [`PointerEvent`]s for the gesture navigator;
//! arrow keys become navigation directions that bypass it. Only the first
//! finger to touch down owns a touch session.

use crate::domain::NavigationDirection;
use crate::ui::design_tokens::sizing;
use crate::ui::gesture::PointerEvent;
use iced::{event, keyboard, mouse, touch, window, Point, Size};
use std::time::Instant;

/// One unit of gallery input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Pointer(PointerEvent),
    /// Arrow key: navigate directly.
    Key(NavigationDirection),
    /// The viewport changed size.
    Resized(Size),
}

/// Maps an arrow key to a navigation direction.
#[must_use]
pub fn key_direction(key: &keyboard::Key) -> Option<NavigationDirection> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(NavigationDirection::Previous),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(NavigationDirection::Next),
        _ => None,
    }
}

/// Window size and cursor position, tracked while no deck is shown so a
/// deck created later starts from the real window state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Size,
    pub cursor: Option<Point>,
}

impl Viewport {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self { size, cursor: None }
    }

    /// Records resize and cursor events; everything else is ignored.
    pub fn observe(&mut self, event: &event::Event) {
        match event {
            event::Event::Window(window::Event::Resized(size)) => self.size = *size,
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Some(*position);
            }
            event::Event::Mouse(mouse::Event::CursorLeft) => self.cursor = None,
            _ => {}
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT))
    }
}

/// Tracks the device state needed to turn raw events into pointer sessions.
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    cursor: Option<Point>,
    mouse_down: bool,
    finger: Option<touch::Finger>,
}

impl InputAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An adapter that already knows where the cursor is.
    #[must_use]
    pub fn with_cursor(cursor: Option<Point>) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    /// Translates one raw event. Events the gallery does not use yield `None`.
    pub fn translate(&mut self, event: &event::Event, now: Instant) -> Option<Input> {
        match event {
            event::Event::Mouse(mouse_event) => self.mouse(mouse_event, now).map(Input::Pointer),
            event::Event::Touch(touch_event) => self.touch(touch_event, now).map(Input::Pointer),
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                key_direction(key).map(Input::Key)
            }
            event::Event::Window(window::Event::Resized(size)) => Some(Input::Resized(*size)),
            _ => None,
        }
    }

    fn mouse(&mut self, event: &mouse::Event, at: Instant) -> Option<PointerEvent> {
        match *event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = Some(position);
                self.mouse_down
                    .then_some(PointerEvent::Move { position, at })
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if self.finger.is_some() {
                    return None;
                }
                let position = self.cursor?;
                self.mouse_down = true;
                Some(PointerEvent::Down { position, at })
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                if !self.mouse_down {
                    return None;
                }
                self.mouse_down = false;
                match self.cursor {
                    Some(position) => Some(PointerEvent::Up { position, at }),
                    None => Some(PointerEvent::Cancel),
                }
            }
            mouse::Event::CursorLeft => {
                self.cursor = None;
                if self.mouse_down {
                    self.mouse_down = false;
                    Some(PointerEvent::Cancel)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn touch(&mut self, event: &touch::Event, at: Instant) -> Option<PointerEvent> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                if self.finger.is_some() || self.mouse_down {
                    return None;
                }
                self.finger = Some(id);
                Some(PointerEvent::Down { position, at })
            }
            touch::Event::FingerMoved { id, position } if self.finger == Some(id) => {
                Some(PointerEvent::Move { position, at })
            }
            touch::Event::FingerLifted { id, position } if self.finger == Some(id) => {
                self.finger = None;
                Some(PointerEvent::Up { position, at })
            }
            touch::Event::FingerLost { id, .. } if self.finger == Some(id) => {
                self.finger = None;
                Some(PointerEvent::Cancel)
            }
            _ => None,
        }
    }
}
