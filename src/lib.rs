// SPDX-License-Identifier: MPL-2.0
//! `card_deck` is a swipeable image card gallery built with the Iced GUI framework.
//!
//! Cards listed in a JSON manifest are shown one at a time. A drag, flick or
//! arrow key moves to the neighbouring card, and the window background takes
//! the dominant colour of the card on display.

pub mod app;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;
