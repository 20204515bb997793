// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when the gallery has no cards.
//!
//! Shown while the manifest is loading, when it could not be read, and when
//! it lists zero cards.

use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// Why the gallery is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    Loading,
    ManifestUnavailable,
    NoCards,
}

impl EmptyReason {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            EmptyReason::Loading => "Loading cards",
            EmptyReason::ManifestUnavailable => "Cards unavailable",
            EmptyReason::NoCards => "No cards",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            EmptyReason::Loading => "Reading the card manifest",
            EmptyReason::ManifestUnavailable => "The card manifest could not be read",
            EmptyReason::NoCards => "The card manifest lists no cards",
        }
    }
}

/// Renders the empty state, optionally naming the manifest path.
pub fn view<'a, Message: 'a>(reason: EmptyReason, manifest: Option<String>) -> Element<'a, Message> {
    let title = Text::new(reason.title())
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(reason.subtitle())
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle);

    if let Some(path) = manifest {
        content = content.push(Text::new(path).size(typography::CAPTION).color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        }));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
