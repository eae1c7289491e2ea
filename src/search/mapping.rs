// SPDX-License-Identifier: MPL-2.0
//! Wire format of the search service and its mapping into [`SearchResult`]s.
//!
//! The service is loosely typed: ids may be strings or numbers, scores may
//! arrive as strings, and `payload` fields are optional. Deserialization
//! therefore keeps raw JSON values and the mapping functions decide how to
//! coerce them.

use super::model::{SearchResult, SearchResultMetadata};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// JSON body of `POST /search_text`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextSearchRequest<'a> {
    pub text: &'a str,
    pub top_k: u32,
    /// Always `null`: the page searches every indexed dataset.
    pub dataset_names: Option<Vec<String>>,
}

/// Successful body of both search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "results_or_empty")]
    pub results: Vec<RawResult>,
}

/// One backend result item, before coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub score: Value,
    #[serde(default)]
    pub payload: Value,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    /// Returns the detail text worth showing to the user, if any.
    #[must_use]
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Value::Null => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Accepts a missing, `null` or non-array `results` field as an empty list
/// and skips entries that are not objects.
fn results_or_empty<'de, D>(deserializer: D) -> Result<Vec<RawResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Builds the URL of a result image from the backend file path.
///
/// Only the last path segment is used, with either separator style. An empty
/// path or a path ending in a separator yields an empty URL.
#[must_use]
pub fn build_image_url(base_url: &str, raw_path: &str) -> String {
    let filename = raw_path.rsplit(['/', '\\']).next().unwrap_or_default();
    if filename.is_empty() {
        return String::new();
    }
    format!(
        "{}/images/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(filename)
    )
}

/// Title of a result card.
#[must_use]
pub fn title_for(id: &str, metadata: Option<&SearchResultMetadata>) -> String {
    match metadata {
        Some(SearchResultMetadata {
            person_id: Some(person),
            clothes_id: Some(clothes),
            ..
        }) => format!("Person {person} (clothes {clothes})"),
        _ => format!("Result {id}"),
    }
}

/// Coerces a JSON score into a number; anything unparseable counts as 0.
#[must_use]
pub fn coerce_score(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|score| score.is_finite())
            .unwrap_or(0.0),
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        _ => 0.0,
    }
}

/// Coerces a JSON id into its string form.
#[must_use]
pub fn coerce_id(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Maps one backend item into a view model.
#[must_use]
pub fn map_result(base_url: &str, item: &RawResult) -> SearchResult {
    let id = coerce_id(&item.id);

    let metadata = item
        .payload
        .get("metadata")
        .and_then(Value::as_object)
        .map(SearchResultMetadata::from_json);

    let image_url = item
        .payload
        .get("path")
        .and_then(Value::as_str)
        .map(|path| build_image_url(base_url, path))
        .unwrap_or_default();

    SearchResult {
        title: title_for(&id, metadata.as_ref()),
        score: coerce_score(&item.score),
        id,
        image_url,
        metadata,
    }
}

/// Maps a whole response, preserving backend order.
#[must_use]
pub fn map_response(base_url: &str, response: &SearchResponse) -> Vec<SearchResult> {
    response
        .results
        .iter()
        .map(|item| map_result(base_url, item))
        .collect()
}
