// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer, touch, keyboard and resize events are routed to the card deck;
//! everything else is dropped here.

use super::Message;
use crate::ui::deck;
use iced::{event, window, Subscription};

/// Routes native input events to the deck.
///
/// Events are forwarded regardless of capture status so a drag keeps
/// tracking even when the strip scrollable also reacted to it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        is_deck_input(&event).then(|| Message::Deck(deck::Message::RawEvent(event)))
    })
}

fn is_deck_input(event: &event::Event) -> bool {
    matches!(
        event,
        event::Event::Mouse(_)
            | event::Event::Touch(_)
            | event::Event::Keyboard(_)
            | event::Event::Window(window::Event::Resized(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{mouse, Size};

    #[test]
    fn routes_input_and_resize_only() {
        assert!(is_deck_input(&event::Event::Mouse(mouse::Event::CursorLeft)));
        assert!(is_deck_input(&event::Event::Window(window::Event::Resized(
            Size::new(800.0, 600.0)
        ))));
        assert!(!is_deck_input(&event::Event::Window(
            window::Event::CloseRequested
        )));
    }
}
