// SPDX-License-Identifier: MPL-2.0
//! Card image loading and decoding.
//!
//! Decoding runs on the blocking pool so the UI thread never waits on it. The
//! returned [`CardImage`] carries the iced handle used for drawing and a small
//! sampling raster for the colour sampler. The full-size pixels live only in
//! the handle.

use crate::error::{Error, Result, SampleUnavailable};
use crate::media::color_sampler::{self, Swatch};
use iced::widget::image;
use image_rs::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CardImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Downsampled copy read by the colour sampler.
    raster: Arc<RgbaImage>,
}

impl CardImage {
    /// Wraps decoded RGBA pixels, handing the buffer to the iced handle.
    #[must_use]
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        let (width, height) = pixels.dimensions();
        let raster = color_sampler::downsample(&pixels);
        let handle = image::Handle::from_rgba(width, height, pixels.into_raw());
        Self {
            handle,
            width,
            height,
            raster: Arc::new(raster),
        }
    }

    /// The sampling raster, at most [`color_sampler::SAMPLE_SIZE`] square.
    #[must_use]
    pub fn raster(&self) -> &RgbaImage {
        &self.raster
    }

    /// Runs the colour sampler on the sampling raster.
    ///
    /// # Errors
    ///
    /// Returns [`SampleUnavailable`] when no usable colour exists.
    pub fn sample(&self) -> std::result::Result<Swatch, SampleUnavailable> {
        color_sampler::sample_rgba(&self.raster)
    }
}

/// Decodes the image at `path` on the calling thread.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or decoded.
pub fn load_card_image_blocking<P: AsRef<Path>>(path: P) -> Result<CardImage> {
    let bytes = fs::read(path.as_ref())?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    Ok(CardImage::from_rgba(decoded.to_rgba8()))
}

/// Loads and decodes the image at `path` without blocking the UI thread.
///
/// The returned future completes once decoding has finished, so anything
/// that reads pixels can simply be sequenced after it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or decoded, or if the
/// decoding task is aborted.
pub async fn load_card_image(path: PathBuf) -> Result<CardImage> {
    tokio::task::spawn_blocking(move || load_card_image_blocking(path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}
