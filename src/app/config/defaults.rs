// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Result count**: `top_k` bounds and initial value
//! - **Thumbnails**: Result image cache sizing
//! - **Service**: Environment variable naming the search service

// ==========================================================================
// Result Count Defaults
// ==========================================================================

/// Result count shown when the page opens.
pub const DEFAULT_RESULT_COUNT: u32 = 8;

/// Minimum number of results a search may request.
pub const MIN_RESULT_COUNT: u32 = 1;

/// Maximum number of results a search may request.
pub const MAX_RESULT_COUNT: u32 = 10_000;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default number of decoded result images kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_SIZE: usize = 256;

/// Minimum thumbnail cache size.
pub const MIN_THUMBNAIL_CACHE_SIZE: usize = 16;

/// Maximum thumbnail cache size.
pub const MAX_THUMBNAIL_CACHE_SIZE: usize = 4096;

// ==========================================================================
// Service
// ==========================================================================

/// Environment variable holding the search service base URL.
pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
