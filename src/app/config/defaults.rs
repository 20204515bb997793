// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Manifest and image folder locations
//! - **Display**: Card size and background colours
//! - **Navigation**: Tap zones and prefetching

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default manifest path, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "cards.json";

/// Default image folder, relative to the manifest's folder.
pub const DEFAULT_CARDS_DIR: &str = "cards";

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default card width in logical pixels.
pub const DEFAULT_CARD_WIDTH: f32 = 300.0;

/// Smallest accepted card width.
pub const MIN_CARD_WIDTH: f32 = 64.0;

/// Largest accepted card width.
pub const MAX_CARD_WIDTH: f32 = 2048.0;

/// Background used when no colour can be sampled (light gray).
pub const DEFAULT_FALLBACK_BACKGROUND: &str = "#f0f0f0";

/// Whether the background fades from the sampled colour to white.
pub const DEFAULT_GRADIENT: bool = true;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Whether a plain tap on the left/right half of the viewport navigates.
pub const DEFAULT_TAP_ZONES: bool = false;

/// Whether neighbouring cards are decoded ahead of time.
pub const DEFAULT_PREFETCH: bool = true;

/// Number of decoded cards kept in memory.
pub const DEFAULT_CACHE_CARDS: usize = 8;

/// Smallest accepted cache size (current card plus both neighbours).
pub const MIN_CACHE_CARDS: usize = 3;

/// Largest accepted cache size.
pub const MAX_CACHE_CARDS: usize = 64;
