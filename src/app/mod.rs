// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the configuration, the viewer position store and,
//! once the manifest has loaded, the card deck. It translates deck effects
//! into persistence and keeps a one-line status for non-fatal problems.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::error::{Error, Result};
use crate::media::{self, Manifest};
use crate::ui::deck::{self, empty_state::EmptyReason, DeckSettings};
use crate::ui::design_tokens::sizing;
use crate::ui::input::Viewport;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::{FileStateStore, PositionStore};
use std::fmt;
use std::path::{Path, PathBuf};

pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    config: Config,
    deck: Option<deck::State>,
    store: Box<dyn PositionStore>,
    manifest_path: PathBuf,
    empty_reason: EmptyReason,
    /// Window state, tracked even while no deck exists.
    viewport: Viewport,
    /// Key of the latest non-fatal problem, shown in the status line.
    status: Option<String>,
    /// Incremented for every manifest request.
    generation: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("manifest_path", &self.manifest_path)
            .field("current_index", &self.current_index())
            .field("empty_reason", &self.empty_reason)
            .field("status", &self.status)
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the persisted position, then starts reading the
    /// manifest.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let (store, state_warning) = FileStateStore::open(flags.data_dir.map(PathBuf::from));

        let manifest_path = flags
            .manifest
            .map(PathBuf::from)
            .unwrap_or_else(|| config.manifest_path());

        let mut app = App::with_store(config, Box::new(store), manifest_path);
        app.status = config_warning.or(state_warning);

        let task = app.load_manifest();
        (app, task)
    }

    /// Builds an app around an explicit position store without touching
    /// the file system. No manifest is requested yet.
    pub fn with_store(
        config: Config,
        store: Box<dyn PositionStore>,
        manifest_path: PathBuf,
    ) -> Self {
        Self {
            config,
            deck: None,
            store,
            manifest_path,
            empty_reason: EmptyReason::Loading,
            viewport: Viewport::default(),
            status: None,
            generation: 0,
        }
    }

    /// Starts reading the manifest. Failures are reported once and not retried.
    pub fn load_manifest(&mut self) -> Task<Message> {
        self.generation += 1;
        self.deck = None;
        self.empty_reason = EmptyReason::Loading;

        let generation = self.generation;
        let path = self.manifest_path.clone();
        tracing::info!(path = %path.display(), "loading manifest");
        Task::perform(
            media::load_manifest(path, self.config.cards_dir()),
            move |result| Message::ManifestLoaded { generation, result },
        )
    }

    #[must_use]
    pub fn deck(&self) -> Option<&deck::State> {
        self.deck.as_ref()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.deck.as_ref().and_then(deck::State::current_index)
    }

    #[must_use]
    pub fn position_store(&self) -> &dyn PositionStore {
        self.store.as_ref()
    }

    #[must_use]
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    #[must_use]
    pub fn empty_reason(&self) -> EmptyReason {
        self.empty_reason
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Deck settings resolved from the configuration.
    #[must_use]
    pub fn deck_settings(&self) -> DeckSettings {
        DeckSettings {
            card_width: self.config.card_width(),
            fallback_background: self.config.fallback_background(),
            gradient: self.config.gradient(),
            tap_zones: self.config.tap_zones(),
            prefetch: self.config.prefetch(),
            cache_cards: self.config.cache_cards(),
        }
    }

    pub fn title(&self) -> String {
        let card = self
            .deck
            .as_ref()
            .and_then(|deck| deck.session().current());
        match card {
            Some(card) => match card.artist() {
                Some(artist) => format!("{} - {} - Card Deck", card.file(), artist),
                None => format!("{} - Card Deck", card.file()),
            },
            None => "Card Deck".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let deck_ticks = self
            .deck
            .as_ref()
            .map_or_else(Subscription::none, |deck| {
                deck.subscription().map(Message::Deck)
            });
        Subscription::batch([subscription::create_event_subscription(), deck_ticks])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ManifestLoaded { generation, result } => {
                self.manifest_loaded(generation, result)
            }
            Message::Deck(message) => {
                if let deck::Message::RawEvent(event) = &message {
                    self.viewport.observe(event);
                }
                let Some(deck) = self.deck.as_mut() else {
                    return Task::none();
                };
                let (effect, task) = deck.handle_message(message);
                self.apply_effect(effect);
                task.map(Message::Deck)
            }
        }
    }

    fn apply_effect(&mut self, effect: deck::Effect) {
        match effect {
            deck::Effect::None => {}
            deck::Effect::PersistIndex(index) => {
                if let Some(key) = self.store.save_position(index) {
                    tracing::warn!(index, %key, "could not persist viewer position");
                    self.status = Some(key);
                }
            }
        }
    }

    fn manifest_loaded(&mut self, generation: u64, result: Result<Manifest>) -> Task<Message> {
        if generation != self.generation {
            return Task::none();
        }

        match result {
            Ok(manifest) => {
                tracing::info!(
                    cards = manifest.cards.len(),
                    dir = %manifest.cards_dir.display(),
                    "manifest loaded"
                );
                let start = self.store.load_position().unwrap_or(0);
                let (deck, task) = deck::State::new(
                    manifest,
                    start,
                    self.deck_settings(),
                    self.viewport,
                    generation,
                );
                self.deck = Some(deck);
                task.map(Message::Deck)
            }
            Err(Error::EmptyGallery) => {
                tracing::warn!(path = %self.manifest_path.display(), "manifest lists no cards");
                self.empty_reason = EmptyReason::NoCards;
                self.status = Some(Error::EmptyGallery.notification_key().to_string());
                Task::none()
            }
            Err(error) => {
                tracing::error!(path = %self.manifest_path.display(), %error, "manifest unavailable");
                self.empty_reason = EmptyReason::ManifestUnavailable;
                self.status = Some(error.notification_key().to_string());
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            deck: self.deck.as_ref(),
            empty_reason: self.empty_reason,
            manifest_path: &self.manifest_path,
            status: self.status.as_deref(),
        })
    }
}
