// SPDX-License-Identifier: MPL-2.0
//! Colour primitives shared by the sampler and the card view.
//!
//! Channel math is integer 0-255; hue, saturation and value are floats in `[0, 1]`.

use std::fmt;

/// Perceived brightness above which dark text is used.
pub const TEXT_BRIGHTNESS_THRESHOLD: f32 = 150.0;

/// An 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Neutral background used when no colour can be sampled.
    pub const NEUTRAL_GRAY: Rgb = Rgb::new(0xf0, 0xf0, 0xf0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl From<Rgb> for iced::Color {
    fn from(rgb: Rgb) -> Self {
        iced::Color::from_rgb8(rgb.r, rgb.g, rgb.b)
    }
}

/// Hue, saturation and value, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Converts an RGB colour to HSV.
///
/// Gray colours (including black) have hue and saturation 0.
#[must_use]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    if d == 0.0 {
        return Hsv { h: 0.0, s: 0.0, v: max };
    }

    let s = d / max;
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsv {
        h: sector / 6.0,
        s,
        v: max,
    }
}

/// Perceived brightness `0.299R + 0.587G + 0.114B`, in `[0, 255]`.
#[must_use]
pub fn perceived_brightness(rgb: Rgb) -> f32 {
    let weighted = u32::from(rgb.r) * 299 + u32::from(rgb.g) * 587 + u32::from(rgb.b) * 114;
    weighted as f32 / 1000.0
}

/// Text colour that stays legible on `background`: black on bright
/// backgrounds, white otherwise.
#[must_use]
pub fn text_color_for(background: Rgb) -> Rgb {
    if perceived_brightness(background) > TEXT_BRIGHTNESS_THRESHOLD {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
