// SPDX-License-Identifier: MPL-2.0
//! Decoded card cache with neighbour prefetching.
//!
//! - **LRU eviction**: least recently shown cards are dropped first
//! - **Index-keyed**: entries are keyed by the card's position in the manifest
//! - **Sampled once**: the swatch is computed when the card first arrives

use crate::error::SampleUnavailable;
use crate::media::color_sampler::Swatch;
use crate::media::image::CardImage;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default number of decoded cards kept in memory.
pub const DEFAULT_MAX_CARDS: usize = 8;

/// A decoded card and the outcome of sampling it.
#[derive(Debug, Clone)]
pub struct LoadedCard {
    pub image: CardImage,
    pub swatch: Result<Swatch, SampleUnavailable>,
}

impl LoadedCard {
    /// Samples `image` and bundles the result.
    #[must_use]
    pub fn sampled(image: CardImage) -> Self {
        let swatch = image.sample();
        Self { image, swatch }
    }
}

/// Cache statistics, mostly useful in tests and logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
pub struct CardCache {
    cache: LruCache<usize, LoadedCard>,
    /// Indices with a load in flight, so the same card is not decoded twice.
    pending: HashSet<usize>,
    stats: CacheStats,
}

impl CardCache {
    #[must_use]
    pub fn new(max_cards: usize) -> Self {
        let capacity = NonZeroUsize::new(max_cards).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            pending: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    /// Returns the cached card and marks it as recently used.
    pub fn get(&mut self, index: usize) -> Option<&LoadedCard> {
        let entry = self.cache.get(&index);
        if entry.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        entry
    }

    /// Returns the cached card without touching recency or stats.
    #[must_use]
    pub fn peek(&self, index: usize) -> Option<&LoadedCard> {
        self.cache.peek(&index)
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.cache.contains(&index)
    }

    pub fn insert(&mut self, index: usize, card: LoadedCard) {
        self.pending.remove(&index);
        self.cache.put(index, card);
    }

    /// Records that `index` is being loaded. Returns `false` if it is already
    /// cached or loading.
    pub fn mark_pending(&mut self, index: usize) -> bool {
        if self.cache.contains(&index) {
            return false;
        }
        self.pending.insert(index)
    }

    /// Clears the in-flight marker after a failed load.
    pub fn clear_pending(&mut self, index: usize) {
        self.pending.remove(&index);
    }

    #[must_use]
    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for CardCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CARDS)
    }
}
