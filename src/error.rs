// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The card manifest could not be read or parsed.
    ManifestUnavailable(String),
    /// The manifest was read but lists no cards.
    EmptyGallery,
    Sample(SampleUnavailable),
}

/// Reasons the colour sampler could not produce a colour.
///
/// Callers are expected to fall back to a neutral background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleUnavailable {
    /// The image has no pixels to read (zero width or height).
    EmptyRaster,

    /// Every pixel was filtered out as transparent or near-white.
    NoUsablePixels,
}

impl SampleUnavailable {
    /// Short key describing the failure, used by the status line.
    pub fn notification_key(&self) -> &'static str {
        match self {
            SampleUnavailable::EmptyRaster => "sample-empty-raster",
            SampleUnavailable::NoUsablePixels => "sample-no-usable-pixels",
        }
    }
}

impl Error {
    /// Returns the status key for this error.
    pub fn notification_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "io-error",
            Error::Config(_) => "config-error",
            Error::ManifestUnavailable(_) => "manifest-unavailable",
            Error::EmptyGallery => "empty-gallery",
            Error::Sample(reason) => reason.notification_key(),
        }
    }
}

impl fmt::Display for SampleUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleUnavailable::EmptyRaster => write!(f, "image has no readable pixels"),
            SampleUnavailable::NoUsablePixels => {
                write!(f, "no opaque, non-white pixels to sample")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::ManifestUnavailable(e) => write!(f, "Manifest unavailable: {}", e),
            Error::EmptyGallery => write!(f, "Gallery is empty"),
            Error::Sample(e) => write!(f, "Sample unavailable: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SampleUnavailable> for Error {
    fn from(err: SampleUnavailable) -> Self {
        Error::Sample(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ManifestUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
