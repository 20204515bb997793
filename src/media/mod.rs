// SPDX-License-Identifier: MPL-2.0
//! Card media: manifest loading, image decoding, colour sampling and caching.

pub mod color;
pub mod color_sampler;
pub mod image;
pub mod manifest;
pub mod prefetch;

// Re-export commonly used types
pub use color::Rgb;
pub use color_sampler::{sample, Swatch};
pub use image::{load_card_image, CardImage};
pub use manifest::{load_manifest, parse_manifest, Manifest};
pub use prefetch::{CardCache, LoadedCard};
