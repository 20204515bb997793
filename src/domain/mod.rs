// SPDX-License-Identifier: MPL-2.0
//! Domain layer - card and gallery rules with no external dependencies.
//!
//! # Modules
//!
//! - [`card`]: the [`Card`](card::Card) value object
//! - [`gallery`]: [`GallerySession`](gallery::GallerySession) and index normalization

pub mod card;
pub mod gallery;

pub use card::Card;
pub use gallery::{normalize_index, GallerySession, NavigationDirection};
