// SPDX-License-Identifier: MPL-2.0
//! Card manifest loading.
//!
//! The manifest is a JSON array. Each entry is either an object
//! `{"file": "...", "artist": "..."}` (artist optional) or a bare file name.

use crate::domain::Card;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestEntry {
    Record {
        file: String,
        #[serde(default)]
        artist: Option<String>,
    },
    FileName(String),
}

impl From<ManifestEntry> for Card {
    fn from(entry: ManifestEntry) -> Self {
        match entry {
            ManifestEntry::Record { file, artist } => Card::new(file, artist),
            ManifestEntry::FileName(file) => Card::new(file, None),
        }
    }
}

/// Parses manifest JSON into cards, keeping manifest order.
///
/// # Errors
///
/// Returns [`Error::ManifestUnavailable`] for malformed JSON and
/// [`Error::EmptyGallery`] when the array has no entries.
pub fn parse_manifest(json: &str) -> Result<Vec<Card>> {
    let entries: Vec<ManifestEntry> = serde_json::from_str(json)?;
    if entries.is_empty() {
        return Err(Error::EmptyGallery);
    }
    Ok(entries.into_iter().map(Card::from).collect())
}

/// A loaded manifest and the directory its card images live in.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub cards: Vec<Card>,
    pub cards_dir: PathBuf,
}

/// Directory holding card images: `cards_dir` resolved against the
/// manifest's own folder.
#[must_use]
pub fn resolve_cards_dir(manifest_path: &Path, cards_dir: &Path) -> PathBuf {
    if cards_dir.is_absolute() {
        return cards_dir.to_path_buf();
    }
    manifest_path
        .parent()
        .map_or_else(|| cards_dir.to_path_buf(), |parent| parent.join(cards_dir))
}

/// Reads and parses the manifest at `path`. Failures are not retried.
///
/// # Errors
///
/// Returns [`Error::ManifestUnavailable`] when the file cannot be read or
/// parsed, and [`Error::EmptyGallery`] when it lists no cards.
pub async fn load_manifest(path: PathBuf, cards_dir: PathBuf) -> Result<Manifest> {
    let json = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| Error::ManifestUnavailable(format!("{}: {}", path.display(), e)))?;
    let cards = parse_manifest(&json)?;
    Ok(Manifest {
        cards,
        cards_dir: resolve_cards_dir(&path, &cards_dir),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_records_with_optional_artist() {
        let cards = parse_manifest(r#"[{"file":"a.png","artist":"X"},{"file":"b.png"}]"#)
            .expect("valid manifest");
        assert_eq!(
            cards,
            vec![
                Card::new("a.png", Some("X".to_string())),
                Card::new("b.png", None)
            ]
        );
    }

    #[test]
    fn accepts_bare_file_names() {
        let cards = parse_manifest(r#"["a.png", {"file":"b.png","artist":"Y"}]"#).expect("valid");
        assert_eq!(cards[0].file(), "a.png");
        assert_eq!(cards[1].artist(), Some("Y"));
    }

    #[test]
    fn empty_array_is_empty_gallery() {
        assert_eq!(parse_manifest("[]"), Err(Error::EmptyGallery));
    }

    #[test]
    fn malformed_json_is_unavailable() {
        assert!(matches!(
            parse_manifest(r#"{"file":"a.png"}"#),
            Err(Error::ManifestUnavailable(_))
        ));
        assert!(matches!(
            parse_manifest("[{\"artist\":\"no file\"}]"),
            Err(Error::ManifestUnavailable(_))
        ));
    }

    #[test]
    fn cards_dir_is_relative_to_manifest() {
        assert_eq!(
            resolve_cards_dir(Path::new("/srv/gallery/cards.json"), Path::new("cards")),
            PathBuf::from("/srv/gallery/cards")
        );
        assert_eq!(
            resolve_cards_dir(Path::new("/srv/gallery/cards.json"), Path::new("/abs/cards")),
            PathBuf::from("/abs/cards")
        );
    }

    #[tokio::test]
    async fn load_manifest_from_disk() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("cards.json");
        std::fs::write(&path, r#"[{"file":"a.png"}]"#).expect("write manifest");

        let manifest = load_manifest(path, PathBuf::from("cards"))
            .await
            .expect("manifest loads");
        assert_eq!(manifest.cards.len(), 1);
        assert_eq!(manifest.cards_dir, temp_dir.path().join("cards"));
    }

    #[tokio::test]
    async fn missing_manifest_is_unavailable() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_manifest(temp_dir.path().join("missing.json"), PathBuf::from("cards")).await;
        assert!(matches!(result, Err(Error::ManifestUnavailable(_))));
    }
}
