// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::deck::{self, empty_state::EmptyReason};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub deck: Option<&'a deck::State>,
    pub empty_reason: EmptyReason,
    pub manifest_path: &'a Path,
    pub status: Option<&'a str>,
}

/// Renders the deck, or the empty state when no gallery is loaded.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.deck {
        Some(deck) => deck.view().map(Message::Deck),
        None => deck::empty_state::view(
            ctx.empty_reason,
            Some(ctx.manifest_path.display().to_string()),
        ),
    };

    let mut column = Column::new().push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if let Some(status) = ctx.status {
        column = column.push(
            Container::new(
                Text::new(status.to_string())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_700),
            )
            .width(Length::Fill)
            .padding(spacing::XXS)
            .align_x(alignment::Horizontal::Right),
        );
    }

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
