// SPDX-License-Identifier: MPL-2.0
//! Card value object.

use std::path::{Path, PathBuf};

/// A displayable card: an image file and an optional artist caption.
///
/// Cards are immutable once loaded from the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    file: String,
    artist: Option<String>,
}

impl Card {
    /// Creates a card. An empty or whitespace-only artist is treated as absent.
    #[must_use]
    pub fn new(file: impl Into<String>, artist: Option<String>) -> Self {
        Self {
            file: file.into(),
            artist: artist.filter(|a| !a.trim().is_empty()),
        }
    }

    /// File name relative to the cards directory.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    /// Resolves the image path of this card inside `cards_dir`.
    #[must_use]
    pub fn image_path(&self, cards_dir: &Path) -> PathBuf {
        cards_dir.join(&self.file)
    }
}
