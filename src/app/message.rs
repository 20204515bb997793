// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::Manifest;
use crate::ui::deck;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Deck(deck::Message),
    /// Result of reading the card manifest.
    ManifestLoaded {
        generation: u64,
        result: Result<Manifest, Error>,
    },
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Manifest path; overrides `[gallery] manifest` from the settings.
    pub manifest: Option<String>,
    /// Optional data directory override (for `state.cbor`).
    /// Takes precedence over `CARD_DECK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `CARD_DECK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
