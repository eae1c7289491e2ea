// SPDX-License-Identifier: MPL-2.0
//! Person similarity search.
//!
//! All matching happens in a remote service; this module only knows its HTTP
//! contract and the view models the page renders.
//!
//! - [`model`] - Search mode, results and their metadata
//! - [`result_count`] - The clamped `top_k` value
//! - [`mapping`] - Wire format and response mapping
//! - [`client`] - The HTTP client
//! - [`error`] - What can go wrong during a search
//! - [`thumbnails`] - Result image download and cache

pub mod client;
pub mod error;
pub mod mapping;
pub mod model;
pub mod result_count;
pub mod thumbnails;

pub use client::{ImageUpload, SearchClient};
pub use error::SearchError;
pub use model::{MetadataField, MetadataValue, SearchMode, SearchResult, SearchResultMetadata};
pub use result_count::ResultCount;
