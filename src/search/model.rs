// SPDX-License-Identifier: MPL-2.0
//! Value types rendered by the search page.
//!
//! A [`SearchResult`] is built once from a backend result item and never
//! mutated afterwards; the whole list is replaced on the next search.

use serde_json::{Map, Number, Value};
use std::fmt;

pub const PERSON_ID: &str = "person_id";
pub const CLOTHES_ID: &str = "clothes_id";
pub const LOCATION_ID: &str = "location_id";
pub const FRAME_ID: &str = "frame_id";

/// Metadata keys with a dedicated label, in display order.
pub const KNOWN_KEYS: [&str; 4] = [PERSON_ID, CLOTHES_ID, LOCATION_ID, FRAME_ID];

/// Which input drives the next search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Free-text description of a person.
    #[default]
    Text,
    /// Uploaded photograph.
    Image,
}

/// A single metadata value as sent by the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Text(String),
    Number(Number),
}

impl MetadataValue {
    /// Converts a JSON value, returning `None` for `null`.
    ///
    /// Booleans, arrays and objects keep their JSON text so nothing the
    /// backend sends is silently dropped from the card.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Number(number) => Some(Self::Number(number.clone())),
            other => Some(Self::Text(other.to_string())),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(text) => write!(f, "{text}"),
            MetadataValue::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Label of a metadata row on a result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField<'a> {
    Person,
    Clothes,
    Location,
    Frame,
    Other(&'a str),
}

impl MetadataField<'_> {
    /// Returns the i18n key of the row label, or `None` for free-form keys
    /// which are displayed verbatim.
    #[must_use]
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            MetadataField::Person => Some("metadata-person"),
            MetadataField::Clothes => Some("metadata-clothes"),
            MetadataField::Location => Some("metadata-location"),
            MetadataField::Frame => Some("metadata-frame"),
            MetadataField::Other(_) => None,
        }
    }
}

/// Descriptive identifiers attached to a result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResultMetadata {
    pub person_id: Option<MetadataValue>,
    pub clothes_id: Option<MetadataValue>,
    pub location_id: Option<MetadataValue>,
    pub frame_id: Option<MetadataValue>,
    /// Remaining keys in backend order.
    pub extra: Vec<(String, MetadataValue)>,
}

impl SearchResultMetadata {
    /// Builds metadata from a JSON object. `null` values count as absent.
    #[must_use]
    pub fn from_json(map: &Map<String, Value>) -> Self {
        let known = |key: &str| map.get(key).and_then(MetadataValue::from_json);

        let extra = map
            .iter()
            .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
            .filter_map(|(key, value)| {
                MetadataValue::from_json(value).map(|value| (key.clone(), value))
            })
            .collect();

        Self {
            person_id: known(PERSON_ID),
            clothes_id: known(CLOTHES_ID),
            location_id: known(LOCATION_ID),
            frame_id: known(FRAME_ID),
            extra,
        }
    }

    /// Returns the rows shown when the card's metadata is expanded.
    ///
    /// Known identifiers come first in a fixed order, followed by any other
    /// keys the backend sent.
    pub fn entries(&self) -> impl Iterator<Item = (MetadataField<'_>, &MetadataValue)> {
        let known = [
            (MetadataField::Person, self.person_id.as_ref()),
            (MetadataField::Clothes, self.clothes_id.as_ref()),
            (MetadataField::Location, self.location_id.as_ref()),
            (MetadataField::Frame, self.frame_id.as_ref()),
        ];

        known
            .into_iter()
            .filter_map(|(field, value)| value.map(|value| (field, value)))
            .chain(
                self.extra
                    .iter()
                    .map(|(key, value)| (MetadataField::Other(key.as_str()), value)),
            )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

/// A ranked match returned by the search service.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: String,
    /// Absolute URL of the matched image, empty when the backend sent no path.
    pub image_url: String,
    pub title: String,
    /// Similarity in `0..=1`.
    pub score: f64,
    pub metadata: Option<SearchResultMetadata>,
}

impl SearchResult {
    /// Score shown on the badge, as a whole percentage.
    #[must_use]
    pub fn score_percent(&self) -> i64 {
        #[allow(clippy::cast_possible_truncation)]
        let percent = (self.score * 100.0).round() as i64;
        percent
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}
