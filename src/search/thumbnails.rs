// SPDX-License-Identifier: MPL-2.0
//! Downloading, downscaling and caching of result images.
//!
//! Result lists can be very long, so images are fetched with bounded
//! concurrency and decoded into small RGBA thumbnails before they reach the
//! renderer. Decoded handles are kept in an LRU cache keyed by URL so a
//! repeated search does not download the same images again.

use super::client::SearchClient;
use super::error::SearchError;
use futures_util::stream::{self, Stream, StreamExt};
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Longest edge of a decoded thumbnail, in pixels.
pub const THUMBNAIL_MAX_EDGE: u32 = 512;

/// Maximum number of image downloads in flight.
pub const THUMBNAIL_CONCURRENCY: usize = 6;

/// Decodes image bytes into a thumbnail handle no larger than
/// [`THUMBNAIL_MAX_EDGE`] on either side.
///
/// # Errors
///
/// Returns [`SearchError::ImageRead`] when the bytes are not a supported
/// image format.
pub fn decode_thumbnail(bytes: &[u8]) -> Result<Handle, SearchError> {
    let image =
        image_rs::load_from_memory(bytes).map_err(|e| SearchError::ImageRead(e.to_string()))?;

    let image = if image.width() > THUMBNAIL_MAX_EDGE || image.height() > THUMBNAIL_MAX_EDGE {
        image.thumbnail(THUMBNAIL_MAX_EDGE, THUMBNAIL_MAX_EDGE)
    } else {
        image
    };

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Downloads and decodes a single result image.
async fn load_thumbnail(client: &SearchClient, url: &str) -> Result<Handle, SearchError> {
    let bytes = client.fetch_image(url).await?;
    decode_thumbnail(&bytes)
}

/// Streams `(url, thumbnail)` pairs for the given URLs, at most
/// [`THUMBNAIL_CONCURRENCY`] at a time, in completion order.
pub fn fetch_thumbnails(
    client: SearchClient,
    urls: Vec<String>,
) -> impl Stream<Item = (String, Result<Handle, SearchError>)> {
    stream::iter(urls)
        .map(move |url| {
            let client = client.clone();
            async move {
                let result = load_thumbnail(&client, &url).await;
                (url, result)
            }
        })
        .buffer_unordered(THUMBNAIL_CONCURRENCY)
}

/// LRU cache of decoded thumbnails.
///
/// The configured capacity only bounds what is kept across searches: the
/// cache grows to hold every image of the current result list (see
/// [`ThumbnailCache::fit`]) so no visible card loses its image.
#[derive(Debug)]
pub struct ThumbnailCache {
    entries: LruCache<String, Handle>,
    base_capacity: NonZeroUsize,
}

impl ThumbnailCache {
    /// Creates a cache holding at most `capacity` thumbnails (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            base_capacity: capacity,
        }
    }

    /// Resizes the cache for a result list of `count` images: never below the
    /// configured capacity, never below `count`.
    ///
    /// Shrinking drops the least recently used entries first, so call
    /// [`ThumbnailCache::missing`] for the current list beforehand to move its
    /// cached images to the front.
    pub fn fit(&mut self, count: usize) {
        let capacity = NonZeroUsize::new(count)
            .map_or(self.base_capacity, |count| count.max(self.base_capacity));
        if capacity != self.entries.cap() {
            self.entries.resize(capacity);
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Looks up a thumbnail without touching the recency order.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&Handle> {
        self.entries.peek(url)
    }

    pub fn insert(&mut self, url: String, handle: Handle) {
        self.entries.put(url, handle);
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the URLs that still need downloading: non-empty, not cached,
    /// without duplicates, in the given order. Cached entries that are
    /// requested again are promoted in the LRU order.
    pub fn missing<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut missing = Vec::new();

        for url in urls {
            if url.is_empty() || !seen.insert(url) {
                continue;
            }
            if self.entries.get(url).is_none() {
                missing.push(url.to_string());
            }
        }

        missing
    }
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::new(crate::app::config::DEFAULT_THUMBNAIL_CACHE_SIZE)
    }
}
