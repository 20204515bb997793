// SPDX-License-Identifier: MPL-2.0
//! Dominant colour extraction for card backgrounds.
//!
//! The image is shrunk to a fixed 40×40 raster, so cost does not depend on the
//! source size. Pixels that are mostly transparent or near-white are ignored,
//! the rest are counted in coarse buckets (each channel floored to a multiple
//! of 24). The most frequent bucket wins unless it looks washed out
//! (saturation below 0.3), in which case the most saturated bucket is used.

use super::color::{text_color_for, Rgb};
use crate::error::SampleUnavailable;
use image_rs::imageops::{self, FilterType};
use image_rs::{DynamicImage, RgbaImage};
use std::collections::HashMap;

/// Width and height of the sampling raster.
pub const SAMPLE_SIZE: u32 = 40;

/// Pixels with alpha below this are treated as background.
pub const MIN_ALPHA: u8 = 128;

/// Pixels with every channel above this are treated as white bleed.
pub const WHITE_CUTOFF: u8 = 200;

/// Quantization step per channel.
pub const QUANT_STEP: u8 = 24;

/// Candidates below this saturation are replaced by the most saturated bucket.
pub const MIN_SATURATION: f32 = 0.3;

/// Background colour chosen for an image and the text colour to draw on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub color: Rgb,
    pub text_color: Rgb,
}

impl Swatch {
    /// Builds a swatch for `color` with the matching legible text colour.
    #[must_use]
    pub fn for_color(color: Rgb) -> Self {
        Self {
            color,
            text_color: text_color_for(color),
        }
    }
}

/// Floors each channel to the nearest lower multiple of [`QUANT_STEP`].
#[must_use]
pub fn quantize(rgb: Rgb) -> Rgb {
    let floor = |c: u8| c - c % QUANT_STEP;
    Rgb::new(floor(rgb.r), floor(rgb.g), floor(rgb.b))
}

/// One quantized colour group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBucket {
    /// Quantized colour identifying the bucket.
    pub key: Rgb,
    /// Number of pixels that fell in the bucket.
    pub count: u32,
    /// The first exact pixel colour seen for this bucket.
    pub sample: Rgb,
}

/// Bucket frequencies for one image, in first-seen order.
///
/// Ordering matters for ties: the earliest bucket wins, which keeps the
/// result stable across runs.
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    buckets: Vec<ColorBucket>,
    index: HashMap<Rgb, usize>,
}

impl ColorHistogram {
    /// Builds the histogram of a raster, applying the alpha and whiteness filters.
    #[must_use]
    pub fn from_raster(raster: &RgbaImage) -> Self {
        let mut histogram = Self::default();
        for pixel in raster.pixels() {
            let [r, g, b, a] = pixel.0;
            if a < MIN_ALPHA {
                continue;
            }
            if r > WHITE_CUTOFF && g > WHITE_CUTOFF && b > WHITE_CUTOFF {
                continue;
            }
            histogram.add(Rgb::new(r, g, b));
        }
        histogram
    }

    fn add(&mut self, rgb: Rgb) {
        let key = quantize(rgb);
        match self.index.get(&key) {
            Some(&slot) => self.buckets[slot].count += 1,
            None => {
                self.index.insert(key, self.buckets.len());
                self.buckets.push(ColorBucket {
                    key,
                    count: 1,
                    sample: rgb,
                });
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn buckets(&self) -> &[ColorBucket] {
        &self.buckets
    }

    /// Number of pixels counted in the bucket containing `rgb`.
    #[must_use]
    pub fn count_for(&self, rgb: Rgb) -> u32 {
        self.index
            .get(&quantize(rgb))
            .map_or(0, |&slot| self.buckets[slot].count)
    }

    /// Bucket with the highest count.
    #[must_use]
    pub fn most_frequent(&self) -> Option<&ColorBucket> {
        self.buckets.iter().fold(None, |best, bucket| match best {
            Some(current) if bucket.count <= current.count => Some(current),
            _ => Some(bucket),
        })
    }

    /// Bucket whose sample colour has the highest saturation.
    #[must_use]
    pub fn most_saturated(&self) -> Option<&ColorBucket> {
        self.buckets
            .iter()
            .map(|bucket| (bucket, bucket.sample.to_hsv().s))
            .fold(None, |best: Option<(&ColorBucket, f32)>, (bucket, s)| match best {
                Some((current, best_s)) if s <= best_s => Some((current, best_s)),
                _ => Some((bucket, s)),
            })
            .map(|(bucket, _)| bucket)
    }

    /// The dominant colour: the most frequent bucket, or the most saturated
    /// one when the frequent candidate is washed out.
    #[must_use]
    pub fn dominant(&self) -> Option<Rgb> {
        let candidate = self.most_frequent()?;
        if candidate.sample.to_hsv().s >= MIN_SATURATION {
            return Some(candidate.sample);
        }
        self.most_saturated().map(|bucket| bucket.sample)
    }
}

/// Scales `image` down to the sampling raster.
#[must_use]
pub fn sampling_raster(image: &DynamicImage) -> RgbaImage {
    if image.width() == SAMPLE_SIZE && image.height() == SAMPLE_SIZE {
        return image.to_rgba8();
    }
    image
        .resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Nearest)
        .to_rgba8()
}

/// Samples the dominant colour of an image.
///
/// # Errors
///
/// Returns [`SampleUnavailable::EmptyRaster`] for an image without pixels and
/// [`SampleUnavailable::NoUsablePixels`] when every pixel is filtered out.
pub fn sample(image: &DynamicImage) -> Result<Swatch, SampleUnavailable> {
    if image.width() == 0 || image.height() == 0 {
        return Err(SampleUnavailable::EmptyRaster);
    }
    sample_raster(&sampling_raster(image))
}

/// Samples straight from RGBA pixels, scaling them like [`sample`].
///
/// # Errors
///
/// See [`sample`].
pub fn sample_rgba(image: &RgbaImage) -> Result<Swatch, SampleUnavailable> {
    if image.width() == 0 || image.height() == 0 {
        return Err(SampleUnavailable::EmptyRaster);
    }
    if image.dimensions() == (SAMPLE_SIZE, SAMPLE_SIZE) {
        return sample_raster(image);
    }
    sample_raster(&downsample(image))
}

/// Scales RGBA pixels down to the sampling raster. Images without pixels
/// stay empty.
#[must_use]
pub fn downsample(image: &RgbaImage) -> RgbaImage {
    if image.width() == 0 || image.height() == 0 {
        return RgbaImage::new(0, 0);
    }
    if image.dimensions() == (SAMPLE_SIZE, SAMPLE_SIZE) {
        return image.clone();
    }
    imageops::resize(image, SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Nearest)
}

fn sample_raster(raster: &RgbaImage) -> Result<Swatch, SampleUnavailable> {
    ColorHistogram::from_raster(raster)
        .dominant()
        .map(Swatch::for_color)
        .ok_or(SampleUnavailable::NoUsablePixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;

    fn raster_with(fill: impl Fn(u32, u32) -> [u8; 4]) -> RgbaImage {
        RgbaImage::from_fn(SAMPLE_SIZE, SAMPLE_SIZE, |x, y| Rgba(fill(x, y)))
    }

    #[test]
    fn quantize_floors_to_step() {
        assert_eq!(quantize(Rgb::new(0, 23, 24)), Rgb::new(0, 0, 24));
        assert_eq!(quantize(Rgb::new(255, 240, 239)), Rgb::new(240, 240, 216));
    }

    #[test]
    fn whiteness_filter_keeps_red() {
        // 10% of the rows are pure red, the rest near-white.
        let raster = raster_with(|_, y| {
            if y < 4 {
                [255, 0, 0, 255]
            } else {
                [230, 235, 240, 255]
            }
        });
        let swatch = sample_rgba(&raster).unwrap();
        assert_eq!(swatch.color, Rgb::new(255, 0, 0));
        assert_eq!(swatch.text_color, Rgb::WHITE);
    }

    #[test]
    fn transparent_pixels_never_count() {
        // Left half: opaque blue. Right half: nearly transparent green.
        let raster = raster_with(|x, _| {
            if x < SAMPLE_SIZE / 2 {
                [0, 0, 255, 255]
            } else {
                [0, 255, 0, 127]
            }
        });
        let histogram = ColorHistogram::from_raster(&raster);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.count_for(Rgb::new(0, 0, 255)), 800);
        assert_eq!(histogram.count_for(Rgb::new(0, 255, 0)), 0);
    }

    #[test]
    fn washed_out_majority_yields_to_saturated_minority() {
        // 75% dull gray-blue (saturation < 0.3), 25% vivid orange.
        let raster = raster_with(|x, _| {
            if x < 30 {
                [100, 105, 120, 255]
            } else {
                [230, 120, 10, 255]
            }
        });
        let histogram = ColorHistogram::from_raster(&raster);
        let frequent = histogram.most_frequent().unwrap();
        assert!(frequent.sample.to_hsv().s < MIN_SATURATION);

        let swatch = sample_rgba(&raster).unwrap();
        assert_eq!(swatch.color, Rgb::new(230, 120, 10));
    }

    #[test]
    fn saturated_majority_is_kept() {
        let raster = raster_with(|x, _| {
            if x < 30 {
                [20, 60, 200, 255]
            } else {
                [255, 0, 0, 255]
            }
        });
        let swatch = sample_rgba(&raster).unwrap();
        assert_eq!(swatch.color, Rgb::new(20, 60, 200));
    }

    #[test]
    fn bucket_keeps_first_exact_sample() {
        let raster = raster_with(|x, _| if x == 0 { [50, 50, 150, 255] } else { [60, 60, 160, 255] });
        let histogram = ColorHistogram::from_raster(&raster);
        assert_eq!(histogram.len(), 1);
        let bucket = histogram.buckets()[0];
        assert_eq!(bucket.key, Rgb::new(48, 48, 144));
        assert_eq!(bucket.sample, Rgb::new(50, 50, 150));
        assert_eq!(bucket.count, SAMPLE_SIZE * SAMPLE_SIZE);
    }

    #[test]
    fn all_white_or_transparent_is_unavailable() {
        let raster = raster_with(|x, _| if x % 2 == 0 { [255, 255, 255, 255] } else { [0, 0, 0, 0] });
        assert_eq!(sample_rgba(&raster), Err(SampleUnavailable::NoUsablePixels));
    }

    #[test]
    fn empty_image_is_unavailable() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        assert_eq!(sample(&image), Err(SampleUnavailable::EmptyRaster));
    }

    #[test]
    fn sampling_is_deterministic() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_fn(97, 61, |x, y| {
            Rgba([(x * 3) as u8, (y * 4) as u8, ((x + y) % 256) as u8, 255])
        }));
        let first = sample(&image).unwrap();
        let second = sample(&image).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn large_images_are_downsampled() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(400, 300, Rgba([10, 120, 40, 255])));
        let raster = sampling_raster(&image);
        assert_eq!(raster.dimensions(), (SAMPLE_SIZE, SAMPLE_SIZE));
        assert_eq!(sample(&image).unwrap().color, Rgb::new(10, 120, 40));
    }

    #[test]
    fn downsample_keeps_empty_images_empty() {
        assert_eq!(downsample(&RgbaImage::new(0, 0)).dimensions(), (0, 0));
        let raster = downsample(&RgbaImage::from_pixel(300, 200, Rgba([9, 9, 9, 255])));
        assert_eq!(raster.dimensions(), (SAMPLE_SIZE, SAMPLE_SIZE));
    }

    #[test]
    fn bright_dominant_color_gets_dark_text() {
        let raster = raster_with(|_, _| [250, 220, 90, 255]);
        let swatch = sample_rgba(&raster).unwrap();
        assert_eq!(swatch.text_color, Rgb::BLACK);
    }
}
