// SPDX-License-Identifier: MPL-2.0
//! Card deck component.
//!
//! Shows the current card between its neighbours, follows swipe gestures and
//! arrow keys, and tints the window with the current card's dominant colour.
//!
//! The component owns the [`GallerySession`]; every index change goes
//! through it and is reported to the parent as [`Effect::PersistIndex`].
//! Card images are decoded off the UI thread. Each completion carries the
//! generation of the session that requested it, so loads started for a
//! previous manifest are dropped.

pub mod empty_state;
pub mod strip;

use crate::app::config::{
    DEFAULT_CACHE_CARDS, DEFAULT_CARD_WIDTH, DEFAULT_GRADIENT, DEFAULT_PREFETCH, DEFAULT_TAP_ZONES,
};
use crate::domain::{Card, GallerySession, NavigationDirection};
use crate::error::Error;
use crate::media::{load_card_image, CardCache, CardImage, LoadedCard, Manifest, Rgb, Swatch};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gesture::{GestureEffect, GestureNavigator, Phase};
use crate::ui::input::{Input, InputAdapter, Viewport};
use crate::ui::state::{SlideState, TransitionKind};
use iced::widget::{container, Column, Container, Text};
use iced::{
    alignment, event, gradient, Background, Color, Degrees, Element, Gradient, Length, Point,
    Subscription, Task,
};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use strip::{Slot, SlotContent};

/// Interval of the animation tick (about 60 Hz).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Display and input settings resolved from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckSettings {
    pub card_width: f32,
    pub fallback_background: Rgb,
    pub gradient: bool,
    pub tap_zones: bool,
    pub prefetch: bool,
    pub cache_cards: usize,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            card_width: DEFAULT_CARD_WIDTH,
            fallback_background: Rgb::NEUTRAL_GRAY,
            gradient: DEFAULT_GRADIENT,
            tap_zones: DEFAULT_TAP_ZONES,
            prefetch: DEFAULT_PREFETCH,
            cache_cards: DEFAULT_CACHE_CARDS,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    RawEvent(event::Event),
    CardLoaded {
        index: usize,
        generation: u64,
        result: Result<CardImage, Error>,
    },
    Tick(Instant),
}

/// Side effects the application should perform after a deck message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The current index changed and must be written to the position store.
    PersistIndex(usize),
}

#[derive(Debug)]
pub struct State {
    session: GallerySession,
    cards_dir: PathBuf,
    settings: DeckSettings,
    generation: u64,
    gesture: GestureNavigator,
    input: InputAdapter,
    slide: SlideState,
    cache: CardCache,
    /// Cards whose image failed to decode. Never retried.
    broken: HashSet<usize>,
    /// Background and caption colours currently shown.
    swatch: Swatch,
    viewport_width: f32,
}

impl State {
    /// Starts a session on `manifest` at `start_index` (any integer, wrapped)
    /// and begins loading the current card and its neighbours. `viewport` is
    /// the window state observed so far.
    pub fn new(
        manifest: Manifest,
        start_index: i64,
        settings: DeckSettings,
        viewport: Viewport,
        generation: u64,
    ) -> (Self, Task<Message>) {
        let session = GallerySession::new(manifest.cards, start_index);
        if let Some(index) = session.current_index() {
            tracing::info!(cards = session.len(), index, "gallery ready");
        }

        let mut state = Self {
            session,
            cards_dir: manifest.cards_dir,
            settings,
            generation,
            gesture: GestureNavigator::new(),
            input: InputAdapter::with_cursor(viewport.cursor),
            slide: SlideState::default(),
            cache: CardCache::new(settings.cache_cards),
            broken: HashSet::new(),
            swatch: Swatch::for_color(settings.fallback_background),
            viewport_width: viewport.size.width,
        };
        let task = state.load_around_current();
        (state, task)
    }

    #[must_use]
    pub fn session(&self) -> &GallerySession {
        &self.session
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.current_index()
    }

    /// Colours currently applied to the background and captions.
    #[must_use]
    pub fn swatch(&self) -> Swatch {
        self.swatch
    }

    #[must_use]
    pub fn displacement(&self) -> f32 {
        self.slide.displacement()
    }

    #[must_use]
    pub fn transition(&self) -> Option<TransitionKind> {
        self.slide.transition_kind()
    }

    #[must_use]
    pub fn gesture_phase(&self) -> Phase {
        self.gesture.phase()
    }

    #[must_use]
    pub fn cache(&self) -> &CardCache {
        &self.cache
    }

    #[must_use]
    pub fn is_broken(&self, index: usize) -> bool {
        self.broken.contains(&index)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.slide.is_animating() {
            iced::time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::RawEvent(event) => {
                let now = Instant::now();
                match self.input.translate(&event, now) {
                    Some(input) => self.handle_input(input, now),
                    None => (Effect::None, Task::none()),
                }
            }
            Message::Tick(now) => {
                self.slide.tick(now);
                (Effect::None, self.sync_strip())
            }
            Message::CardLoaded {
                index,
                generation,
                result,
            } => (Effect::None, self.card_loaded(index, generation, result)),
        }
    }

    /// Applies one unit of adapted input.
    pub fn handle_input(&mut self, input: Input, now: Instant) -> (Effect, Task<Message>) {
        match input {
            Input::Key(direction) => {
                self.slide.halt(now);
                let from = self.slide.displacement();
                self.navigate(direction, from, now)
            }
            Input::Pointer(event) => {
                let effect = self.gesture.handle(event);
                self.apply_gesture(effect, now)
            }
            Input::Resized(size) => {
                self.viewport_width = size.width;
                (Effect::None, self.sync_strip())
            }
        }
    }

    fn apply_gesture(&mut self, effect: GestureEffect, now: Instant) -> (Effect, Task<Message>) {
        match effect {
            GestureEffect::None => (Effect::None, Task::none()),
            GestureEffect::Arm => {
                self.slide.halt(now);
                self.gesture.settle(self.slide.displacement());
                (Effect::None, self.sync_strip())
            }
            GestureEffect::Follow { translate, .. } => {
                self.slide.track(translate);
                (Effect::None, self.sync_strip())
            }
            GestureEffect::Navigate {
                direction,
                displacement,
            } => {
                let from = self.gesture.settled_translate() + displacement;
                self.navigate(direction, from, now)
            }
            GestureEffect::SnapBack { displacement } => {
                let from = self.gesture.settled_translate() + displacement;
                self.slide
                    .return_to_rest(from, TransitionKind::SnapBack, now);
                (Effect::None, self.sync_strip())
            }
            GestureEffect::Tap { position } => {
                let from = self.gesture.settled_translate();
                match self.tap_direction(position) {
                    Some(direction) => self.navigate(direction, from, now),
                    None => {
                        self.slide
                            .return_to_rest(from, TransitionKind::SnapBack, now);
                        (Effect::None, self.sync_strip())
                    }
                }
            }
        }
    }

    /// Direction of a tap when tap zones are enabled: left half goes back,
    /// right half goes forward.
    fn tap_direction(&self, position: Point) -> Option<NavigationDirection> {
        if !self.settings.tap_zones || self.viewport_width <= 0.0 {
            return None;
        }
        if position.x < self.viewport_width / 2.0 {
            Some(NavigationDirection::Previous)
        } else {
            Some(NavigationDirection::Next)
        }
    }

    /// Moves one card and slides the new card in from where the container
    /// currently is (`from`, relative to the old card's rest position).
    fn navigate(
        &mut self,
        direction: NavigationDirection,
        from: f32,
        now: Instant,
    ) -> (Effect, Task<Message>) {
        let Some(index) = self.session.navigate(direction) else {
            return (Effect::None, Task::none());
        };
        tracing::info!(index, ?direction, "navigated");

        let start = from + direction.delta() as f32 * self.settings.card_width;
        self.slide
            .return_to_rest(start, TransitionKind::Navigate, now);
        self.show_current();

        let task = Task::batch([self.sync_strip(), self.load_around_current()]);
        (Effect::PersistIndex(index), task)
    }

    /// Applies the current card's colours if it has been decoded. Otherwise
    /// the previous colours stay until the load completes.
    fn show_current(&mut self) {
        let Some(index) = self.session.current_index() else {
            return;
        };
        let fallback = self.settings.fallback_background;
        if let Some(loaded) = self.cache.get(index) {
            self.swatch = loaded
                .swatch
                .unwrap_or_else(|_| Swatch::for_color(fallback));
        }
    }

    fn card_loaded(
        &mut self,
        index: usize,
        generation: u64,
        result: Result<CardImage, Error>,
    ) -> Task<Message> {
        if generation != self.generation {
            tracing::debug!(index, generation, "ignoring card from a previous gallery");
            return Task::none();
        }

        match result {
            Ok(image) => {
                if !self.is_near_current(index) {
                    tracing::debug!(index, "dropping card that is no longer shown");
                    self.cache.clear_pending(index);
                    return Task::none();
                }
                let loaded = LoadedCard::sampled(image);
                if let Err(reason) = loaded.swatch {
                    tracing::warn!(index, %reason, "using fallback background");
                }
                self.cache.insert(index, loaded);
                if self.session.current_index() == Some(index) {
                    self.show_current();
                }
            }
            Err(error) => {
                tracing::warn!(index, %error, "card image failed to load");
                self.cache.clear_pending(index);
                self.broken.insert(index);
            }
        }

        // A small cache can evict the current card while neighbours arrive.
        let reload = match self.session.current_index() {
            Some(current) => self.request(current),
            None => Task::none(),
        };
        Task::batch([self.sync_strip(), reload])
    }

    /// Whether `index` is the current card or one the strip shows beside it.
    fn is_near_current(&self, index: usize) -> bool {
        self.session.current_index() == Some(index)
            || [NavigationDirection::Previous, NavigationDirection::Next]
                .into_iter()
                .any(|direction| self.session.peek(direction) == Some(index))
    }

    /// Requests the current card and, with prefetching on, both neighbours.
    fn load_around_current(&mut self) -> Task<Message> {
        let Some(current) = self.session.current_index() else {
            return Task::none();
        };

        let mut indices = vec![current];
        if self.settings.prefetch {
            for direction in [NavigationDirection::Next, NavigationDirection::Previous] {
                if let Some(index) = self.session.peek(direction) {
                    if !indices.contains(&index) {
                        indices.push(index);
                    }
                }
            }
        }

        let tasks: Vec<_> = indices
            .into_iter()
            .map(|index| self.request(index))
            .collect();
        Task::batch(tasks)
    }

    fn request(&mut self, index: usize) -> Task<Message> {
        if self.broken.contains(&index) || !self.cache.mark_pending(index) {
            return Task::none();
        }
        let Some(card) = self.session.get(index) else {
            self.cache.clear_pending(index);
            return Task::none();
        };

        let path = card.image_path(&self.cards_dir);
        let generation = self.generation;
        Task::perform(load_card_image(path), move |result| Message::CardLoaded {
            index,
            generation,
            result,
        })
    }

    fn sync_strip(&self) -> Task<Message> {
        strip::sync(
            self.viewport_width,
            self.settings.card_width,
            self.slide.displacement(),
        )
    }

    fn slot(&self, index: usize) -> Slot<'_> {
        let content = if let Some(loaded) = self.cache.peek(index) {
            SlotContent::Loaded(loaded)
        } else if self.broken.contains(&index) {
            SlotContent::Broken
        } else {
            SlotContent::Loading
        };
        Slot {
            content,
            caption: self.session.get(index).and_then(Card::artist),
        }
    }

    fn neighbour_slot(&self, direction: NavigationDirection) -> Slot<'_> {
        match self.session.peek(direction) {
            Some(index) if self.session.len() > 1 => self.slot(index),
            _ => Slot {
                content: SlotContent::Empty,
                caption: None,
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let Some(current) = self.session.current_index() else {
            return empty_state::view(empty_state::EmptyReason::NoCards, None);
        };

        let slots = vec![
            self.neighbour_slot(NavigationDirection::Previous),
            self.slot(current),
            self.neighbour_slot(NavigationDirection::Next),
        ];
        let text_color = self.swatch.text_color;

        let counter = Text::new(format!("{} / {}", current + 1, self.session.len()))
            .size(typography::CAPTION)
            .color(Color::from(text_color));

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(strip::view(
                slots,
                self.viewport_width,
                self.settings.card_width,
                text_color,
            ))
            .push(counter);

        let background = background(self.swatch, self.settings.gradient);
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme| container::Style {
                background: Some(background),
                text_color: Some(Color::from(text_color)),
                ..Default::default()
            })
            .into()
    }
}

/// Window background for `swatch`: a vertical fade from the colour to white,
/// or a flat fill.
#[must_use]
pub fn background(swatch: Swatch, gradient: bool) -> Background {
    let color = Color::from(swatch.color);
    if gradient {
        Background::Gradient(Gradient::Linear(
            gradient::Linear::new(Degrees(180.0))
                .add_stop(0.0, color)
                .add_stop(1.0, Color::WHITE),
        ))
    } else {
        Background::Color(color)
    }
}
