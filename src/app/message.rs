// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::search::{SearchError, SearchResult};
use crate::ui::empty_state;
use crate::ui::image_search;
use crate::ui::mode_toggle;
use crate::ui::notifications;
use crate::ui::result_count;
use crate::ui::results;
use crate::ui::text_search;
use iced::widget::image::Handle;
use std::time::Instant;

/// What a finished search was about, for the completion toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSubject {
    Text(String),
    Image,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ModeToggle(mode_toggle::Message),
    TextSearch(text_search::Message),
    ImageSearch(image_search::Message),
    ResultCount(result_count::Message),
    Results(results::Message),
    EmptyState(empty_state::Message),
    Notification(notifications::NotificationMessage),
    /// Response of the search request started for `generation`.
    SearchCompleted {
        generation: u64,
        subject: SearchSubject,
        result: Result<Vec<SearchResult>, SearchError>,
    },
    /// One result image finished downloading for `generation`.
    ThumbnailLoaded {
        generation: u64,
        url: String,
        result: Result<Handle, SearchError>,
    },
    /// Startup health check of the search service.
    HealthChecked(Result<(), SearchError>),
    WindowResized(iced::Size),
    Tick(Instant), // Periodic tick for loading animation and toast auto-dismiss
}

impl Message {
    /// Whether this message comes from the user interacting with something
    /// other than the result count field. Such interactions commit the field,
    /// like a blur would.
    pub fn is_page_interaction(&self) -> bool {
        match self {
            Message::ModeToggle(_)
            | Message::TextSearch(_)
            | Message::Results(_)
            | Message::EmptyState(_)
            | Message::Notification(notifications::NotificationMessage::Dismiss(_)) => true,
            Message::ImageSearch(message) => matches!(
                message,
                image_search::Message::BrowsePressed
                    | image_search::Message::ClearPressed
                    | image_search::Message::SearchPressed
            ),
            _ => false,
        }
    }
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional search service URL, taking precedence over `API_BASE_URL`.
    pub api_url: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `PERSON_LENS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PERSON_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_count_messages_do_not_commit_the_field() {
        let message = Message::ResultCount(result_count::Message::DraftChanged("5".into()));
        assert!(!message.is_page_interaction());
        assert!(!Message::Tick(Instant::now()).is_page_interaction());
    }

    #[test]
    fn clicks_elsewhere_commit_the_field() {
        assert!(Message::ModeToggle(mode_toggle::Message::Select(
            crate::search::SearchMode::Image
        ))
        .is_page_interaction());
        assert!(Message::ImageSearch(image_search::Message::ClearPressed).is_page_interaction());
        assert!(!Message::ImageSearch(image_search::Message::FileHovered).is_page_interaction());
    }
}
