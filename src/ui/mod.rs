// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`deck`] - The card deck component (strip, background, empty state)
//! - [`gesture`] - Swipe gesture state machine
//! - [`input`] - Adapters from iced mouse/touch/keyboard events
//! - [`easing`] - Cubic bezier timing curves
//! - [`state`] - Slide animation state
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod deck;
pub mod design_tokens;
pub mod easing;
pub mod gesture;
pub mod input;
pub mod state;
