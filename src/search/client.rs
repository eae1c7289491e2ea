// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the remote person search service.
//!
//! Endpoints used:
//! - `POST {base}/search_text` with a JSON body
//! - `POST {base}/search_image?top_k={n}` with a multipart `file` field
//! - `GET {base}/images/{filename}` for result images
//! - `GET {base}/health` for the startup reachability check
//!
//! One request per user action. There are deliberately no retries and no
//! timeout: the backend may take a long time embedding a large upload.

use super::error::SearchError;
use super::mapping::{self, ErrorBody, SearchResponse, TextSearchRequest};
use super::model::SearchResult;
use reqwest::{multipart, Client, Response};
use serde::Deserialize;
use std::sync::Arc;

/// A local image ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    /// MIME type guessed from the file name (always `image/*`).
    pub mime: String,
    pub bytes: Arc<Vec<u8>>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    #[serde(default)]
    ok: bool,
}

/// Cheaply clonable handle to the search service.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: Arc<str>,
}

impl SearchClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingBaseUrl`] when the URL is blank, or
    /// [`SearchError::Network`] when the TLS backend cannot be initialised.
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(SearchError::MissingBaseUrl);
        }

        let http = Client::builder()
            .user_agent(concat!("PersonLens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: Arc::from(base_url),
        })
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Searches by free-text description.
    ///
    /// # Errors
    ///
    /// Fails on connection errors, non-2xx statuses and undecodable bodies.
    pub async fn search_text(
        &self,
        text: &str,
        top_k: u32,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/search_text", self.base_url);
        tracing::debug!(%url, top_k, "sending text search");

        let response = self
            .http
            .post(&url)
            .json(&TextSearchRequest {
                text,
                top_k,
                dataset_names: None,
            })
            .send()
            .await?;

        self.read_results(response).await
    }

    /// Searches by uploaded photograph.
    ///
    /// # Errors
    ///
    /// Fails on connection errors, non-2xx statuses and undecodable bodies.
    pub async fn search_image(
        &self,
        upload: &ImageUpload,
        top_k: u32,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/search_image?top_k={top_k}", self.base_url);
        tracing::debug!(%url, file = %upload.file_name, bytes = upload.bytes.len(), "sending image search");

        let part = multipart::Part::bytes(upload.bytes.as_ref().clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime)
            .map_err(|e| SearchError::ImageRead(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;

        self.read_results(response).await
    }

    /// Downloads a result image.
    ///
    /// # Errors
    ///
    /// Fails on connection errors and non-2xx statuses.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, SearchError> {
        let response = self.http.get(url).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Checks that the service is up and has finished loading its model.
    ///
    /// # Errors
    ///
    /// Fails when the service is unreachable, answers with an error status
    /// (503 while the model is loading), or reports `ok: false`.
    pub async fn health(&self) -> Result<(), SearchError> {
        let url = format!("{}/health", self.base_url);
        let response = ensure_success(self.http.get(&url).send().await?).await?;
        let health: HealthResponse = response.json().await?;
        if health.ok {
            Ok(())
        } else {
            Err(SearchError::Status {
                status: 503,
                detail: Some("Service not ready".to_string()),
            })
        }
    }

    async fn read_results(&self, response: Response) -> Result<Vec<SearchResult>, SearchError> {
        let response = ensure_success(response).await?;
        let body: SearchResponse = response.json().await?;
        Ok(mapping::map_response(&self.base_url, &body))
    }
}

/// Turns a non-2xx response into [`SearchError::Status`], reading the
/// `detail` field of a JSON error body when there is one.
async fn ensure_success(response: Response) -> Result<Response, SearchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail_text());

    tracing::warn!(status = status.as_u16(), ?detail, "search service returned an error");

    Err(SearchError::Status {
        status: status.as_u16(),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_base_url_is_rejected() {
        assert_eq!(
            SearchClient::new("   ").map(|_| ()),
            Err(SearchError::MissingBaseUrl)
        );
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = SearchClient::new("http://localhost:8000//").expect("valid client");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
