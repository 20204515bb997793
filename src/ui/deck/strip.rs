// SPDX-License-Identifier: MPL-2.0
//! The horizontal card strip: previous, current and next card side by side
//! inside a scrollable with hidden scrollbars.
//!
//! The strip is padded by one viewport width on each side so any
//! displacement reachable during a drag or transition maps to a valid
//! scroll offset.

use super::Message;
use crate::media::{LoadedCard, Rgb};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::scrollable::{Direction, RelativeOffset, Scrollbar};
use iced::widget::{container, operation, Column, Container, Id, Image, Row, Scrollable, Space, Text};
use iced::{alignment, Background, Border, Color, ContentFit, Element, Length, Task};

/// Identifier of the strip scrollable.
pub const STRIP_ID: &str = "card-deck-strip";

/// What one slot of the strip shows.
pub enum SlotContent<'a> {
    Loaded(&'a LoadedCard),
    Loading,
    Broken,
    /// Keeps the slot's width without drawing a card.
    Empty,
}

/// One card of the strip.
pub struct Slot<'a> {
    pub content: SlotContent<'a>,
    pub caption: Option<&'a str>,
}

/// Height of a card image for a given width.
#[must_use]
pub fn card_height(card_width: f32) -> f32 {
    card_width * sizing::CARD_ASPECT
}

/// Horizontal scroll offset that shows the current card `displacement` px
/// right of its centred resting position.
#[must_use]
pub fn strip_offset(viewport_width: f32, card_width: f32, displacement: f32) -> f32 {
    let viewport_width = viewport_width.max(0.0);
    let content_width = 2.0 * viewport_width + 3.0 * card_width;
    let max_offset = (content_width - viewport_width).max(0.0);
    let centred = viewport_width + card_width - (viewport_width - card_width) / 2.0;
    (centred - displacement).clamp(0.0, max_offset)
}

/// Scroll offset as a fraction of the scrollable range.
#[must_use]
pub fn relative_strip_offset(viewport_width: f32, card_width: f32, displacement: f32) -> f32 {
    let max_offset = viewport_width.max(0.0) + 3.0 * card_width;
    if max_offset > 0.0 {
        strip_offset(viewport_width, card_width, displacement) / max_offset
    } else {
        0.0
    }
}

/// Moves the strip to match `displacement`.
pub fn sync(viewport_width: f32, card_width: f32, displacement: f32) -> Task<Message> {
    operation::snap_to(
        Id::new(STRIP_ID),
        RelativeOffset {
            x: relative_strip_offset(viewport_width, card_width, displacement),
            y: 0.0,
        },
    )
}

/// Renders the strip for up to three slots (previous, current, next).
pub fn view<'a>(
    slots: Vec<Slot<'a>>,
    viewport_width: f32,
    card_width: f32,
    caption_color: Rgb,
) -> Element<'a, Message> {
    let caption_color = Color::from(caption_color);
    let pad = Space::new().width(Length::Fixed(viewport_width.max(0.0)));

    let row = slots
        .into_iter()
        .fold(Row::new().push(pad), |row, slot| {
            row.push(card(slot, card_width, caption_color))
        })
        .push(Space::new().width(Length::Fixed(viewport_width.max(0.0))));

    Scrollable::new(row)
        .id(Id::new(STRIP_ID))
        .width(Length::Fill)
        .height(Length::Shrink)
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .into()
}

fn card<'a>(slot: Slot<'a>, card_width: f32, caption_color: Color) -> Element<'a, Message> {
    let height = card_height(card_width);

    let picture: Element<'a, Message> = match slot.content {
        SlotContent::Loaded(loaded) => Image::new(loaded.image.handle.clone())
            .width(Length::Fixed(card_width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        SlotContent::Loading => placeholder(card_width, height, None),
        SlotContent::Broken => placeholder(card_width, height, Some("!")),
        SlotContent::Empty => {
            return Space::new()
                .width(Length::Fixed(card_width))
                .height(Length::Fixed(height + sizing::CAPTION_HEIGHT))
                .into();
        }
    };

    let framed = Container::new(picture).style(|_theme| container::Style {
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::CARD,
        ..Default::default()
    });

    let caption = Text::new(slot.caption.unwrap_or_default().to_string())
        .size(typography::BODY)
        .color(caption_color);

    Column::new()
        .width(Length::Fixed(card_width))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(framed)
        .push(
            Container::new(caption)
                .height(Length::Fixed(sizing::CAPTION_HEIGHT))
                .align_y(alignment::Vertical::Center),
        )
        .into()
}

fn placeholder<'a>(width: f32, height: f32, mark: Option<&'static str>) -> Element<'a, Message> {
    let label = Text::new(mark.unwrap_or_default())
        .size(typography::TITLE_LG)
        .color(palette::ERROR_500);

    Container::new(label)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_200
            })),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}
