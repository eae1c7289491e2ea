// SPDX-License-Identifier: MPL-2.0
//! Failures of a search action.
//!
//! Every variant ends up as a toast; none of them is fatal to the page.

/// Reasons a search did not produce results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No API base URL is configured.
    #[error("Missing API base URL. Set API_BASE_URL in the environment or in .env.")]
    MissingBaseUrl,

    /// Text mode with a blank description.
    #[error("Please enter a description before searching.")]
    EmptyQuery,

    /// Image mode without a selected file.
    #[error("Please select an image before searching.")]
    NoImageSelected,

    /// The service answered with a non-2xx status.
    #[error("{}", status_description(.status, .detail))]
    Status {
        status: u16,
        /// `detail` field of the JSON error body, when there was one.
        detail: Option<String>,
    },

    /// The request could not be sent or the connection failed.
    #[error("{0}")]
    Network(String),

    /// The response body was not the expected JSON.
    #[error("Invalid response from the search service: {0}")]
    Decode(String),

    /// A local image could not be read or decoded.
    #[error("Could not read image: {0}")]
    ImageRead(String),
}

fn status_description(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("Request failed with status {status}"),
    }
}

impl SearchError {
    /// Returns the i18n key of the toast raised for this error.
    ///
    /// Pre-flight errors have their own message; everything that happened
    /// after the request was issued is reported as "Search failed" with
    /// [`Self::description`] as the body.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SearchError::MissingBaseUrl => "notification-missing-base-url",
            SearchError::EmptyQuery => "notification-empty-query",
            SearchError::NoImageSelected => "notification-no-image",
            SearchError::Status { .. }
            | SearchError::Network(_)
            | SearchError::Decode(_)
            | SearchError::ImageRead(_) => "notification-search-failed",
        }
    }

    /// User-facing description of what went wrong.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// True when the search was blocked before any network call.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SearchError::MissingBaseUrl | SearchError::EmptyQuery | SearchError::NoImageSelected
        )
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::Network(err.to_string())
        }
    }
}
