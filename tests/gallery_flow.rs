// SPDX-License-Identifier: MPL-2.0
use card_deck::app::config::Config;
use card_deck::app::persisted_state::{AppState, FileStateStore, PositionStore};
use card_deck::app::{App, Message};
use card_deck::error::Error;
use card_deck::media::{self, Rgb};
use card_deck::ui::deck;
use iced::{event, keyboard};
use image_rs::{Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const MANIFEST: &str = r#"[{"file":"a.png","artist":"X"},{"file":"b.png"}]"#;

fn arrow(named: keyboard::key::Named) -> Message {
    let code = match named {
        keyboard::key::Named::ArrowLeft => keyboard::key::Code::ArrowLeft,
        _ => keyboard::key::Code::ArrowRight,
    };
    Message::Deck(deck::Message::RawEvent(event::Event::Keyboard(
        keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        },
    )))
}

fn write_card(dir: &Path, name: &str, color: [u8; 4]) {
    fs::create_dir_all(dir).expect("create cards dir");
    RgbaImage::from_pixel(16, 16, Rgba(color))
        .save(dir.join(name))
        .expect("write card image");
}

/// Loads the manifest the way the app does and hands it to `app`.
async fn boot(app: &mut App, manifest_path: &Path) {
    let _ = app.load_manifest();
    let result = media::load_manifest(manifest_path.to_path_buf(), Config::default().cards_dir()).await;
    let _ = app.update(Message::ManifestLoaded {
        generation: 1,
        result,
    });
}

#[tokio::test]
async fn persisted_position_wraps_and_keys_navigate() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest_path = dir.path().join("cards.json");
    fs::write(&manifest_path, MANIFEST).expect("write manifest");

    let data_dir = dir.path().join("data");
    let saved = AppState {
        current_index: Some(5),
    };
    assert!(saved.save_to(Some(data_dir.clone())).is_none());

    let (store, warning) = FileStateStore::open(Some(data_dir.clone()));
    assert!(warning.is_none());
    let mut app = App::with_store(Config::default(), Box::new(store), manifest_path.clone());
    boot(&mut app, &manifest_path).await;

    // 5 % 2
    assert_eq!(app.current_index(), Some(1));
    assert_eq!(app.title(), "b.png - Card Deck");

    let _ = app.update(arrow(keyboard::key::Named::ArrowRight));
    assert_eq!(app.current_index(), Some(0));
    assert_eq!(app.position_store().load_position(), Some(0));
    assert_eq!(app.title(), "a.png - X - Card Deck");

    let _ = app.update(arrow(keyboard::key::Named::ArrowLeft));
    assert_eq!(app.current_index(), Some(1));

    let _ = app.update(arrow(keyboard::key::Named::ArrowLeft));
    assert_eq!(app.current_index(), Some(0));

    // The last position survives a restart.
    let (reopened, _) = FileStateStore::open(Some(data_dir));
    assert_eq!(reopened.load_position(), Some(0));
}

#[tokio::test]
async fn missing_manifest_leaves_gallery_empty() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest_path = dir.path().join("missing.json");

    let result = media::load_manifest(manifest_path.clone(), "cards".into()).await;
    assert!(matches!(result, Err(Error::ManifestUnavailable(_))));

    let (store, _) = FileStateStore::open(Some(dir.path().join("data")));
    let mut app = App::with_store(Config::default(), Box::new(store), manifest_path.clone());
    boot(&mut app, &manifest_path).await;

    assert!(app.deck().is_none());
    assert_eq!(app.status(), Some("manifest-unavailable"));

    // Navigation on an empty gallery is a no-op.
    let _ = app.update(arrow(keyboard::key::Named::ArrowRight));
    assert_eq!(app.current_index(), None);
}

#[tokio::test]
async fn card_images_resolve_next_to_manifest_and_sample() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest_path = dir.path().join("cards.json");
    fs::write(&manifest_path, MANIFEST).expect("write manifest");
    let cards_dir = dir.path().join("cards");
    write_card(&cards_dir, "a.png", [30, 160, 40, 255]);
    write_card(&cards_dir, "b.png", [255, 255, 255, 255]);

    let manifest = media::load_manifest(manifest_path, "cards".into())
        .await
        .expect("manifest loads");
    assert_eq!(manifest.cards_dir, cards_dir);

    let first = media::load_card_image(manifest.cards[0].image_path(&manifest.cards_dir))
        .await
        .expect("decode a.png");
    let swatch = first.sample().expect("green card has a colour");
    assert_eq!(swatch.color, Rgb::new(30, 160, 40));

    // An all-white card has no usable colour; the deck falls back to gray.
    let second = media::load_card_image(manifest.cards[1].image_path(&manifest.cards_dir))
        .await
        .expect("decode b.png");
    assert!(second.sample().is_err());
}
