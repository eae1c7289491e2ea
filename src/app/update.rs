// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report `Event`s; the handlers here turn them into state changes
//! and side effects (HTTP requests, file reads, dialogs, toasts).

use super::message::SearchSubject;
use super::persisted_state::AppState;
use super::{persistence, Message};
use crate::search::thumbnails::{self, ThumbnailCache};
use crate::search::{ImageUpload, SearchClient, SearchError, SearchMode, SearchResult};
use crate::ui::empty_state::{self, Event as EmptyStateEvent};
use crate::ui::image_search::{self, Event as ImageSearchEvent};
use crate::ui::mode_toggle;
use crate::ui::notifications::{self, Notification};
use crate::ui::result_count;
use crate::ui::results;
use crate::ui::text_search::{self, Event as TextSearchEvent};
use iced::widget::image::Handle;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// How long validation toasts stay on screen.
const VALIDATION_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub client: Option<&'a SearchClient>,
    pub mode: &'a mut SearchMode,
    pub query: &'a mut String,
    pub image_search: &'a mut image_search::State,
    pub result_count: &'a mut result_count::State,
    pub results: &'a mut Vec<SearchResult>,
    pub results_state: &'a mut results::State,
    pub thumbnails: &'a mut ThumbnailCache,
    pub is_loading: &'a mut bool,
    pub has_searched: &'a mut bool,
    pub generation: &'a mut u64,
    pub persisted: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

/// A validated request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    Text(String),
    Image(ImageUpload),
}

impl SearchRequest {
    fn subject(&self) -> SearchSubject {
        match self {
            SearchRequest::Text(query) => SearchSubject::Text(query.clone()),
            SearchRequest::Image(_) => SearchSubject::Image,
        }
    }
}

/// Checks that a search can be sent, in this order: a service is configured,
/// then the active mode has its input.
pub fn preflight(
    client: Option<&SearchClient>,
    mode: SearchMode,
    query: &str,
    upload: Option<&ImageUpload>,
) -> Result<SearchRequest, SearchError> {
    if client.is_none() {
        return Err(SearchError::MissingBaseUrl);
    }

    match mode {
        SearchMode::Text => {
            // Whitespace only decides emptiness; the query itself goes out as typed.
            if query.trim().is_empty() {
                Err(SearchError::EmptyQuery)
            } else {
                Ok(SearchRequest::Text(query.to_string()))
            }
        }
        SearchMode::Image => upload
            .cloned()
            .map(SearchRequest::Image)
            .ok_or(SearchError::NoImageSelected),
    }
}

/// Validates the current input and sends the search request.
pub fn handle_search(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.is_loading {
        return Task::none();
    }

    let request = match preflight(
        ctx.client,
        *ctx.mode,
        ctx.query.as_str(),
        ctx.image_search.upload(),
    ) {
        Ok(request) => request,
        Err(error) => {
            tracing::debug!(%error, "search blocked before sending");
            ctx.notifications.push(
                Notification::error(error.i18n_key()).auto_dismiss(VALIDATION_TOAST_DURATION),
            );
            return Task::none();
        }
    };
    // Checked by `preflight`.
    let Some(client) = ctx.client.cloned() else {
        return Task::none();
    };

    let top_k = ctx.result_count.value().value();

    *ctx.is_loading = true;
    *ctx.has_searched = true;
    *ctx.generation += 1;
    let generation = *ctx.generation;
    let subject = request.subject();

    Task::perform(
        async move {
            match request {
                SearchRequest::Text(text) => client.search_text(&text, top_k).await,
                SearchRequest::Image(upload) => client.search_image(&upload, top_k).await,
            }
        },
        move |result| Message::SearchCompleted {
            generation,
            subject,
            result,
        },
    )
}

/// Applies a finished search and starts downloading result images.
pub fn handle_search_completed(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    subject: SearchSubject,
    result: Result<Vec<SearchResult>, SearchError>,
) -> Task<Message> {
    if generation != *ctx.generation {
        return Task::none();
    }

    *ctx.is_loading = false;
    ctx.results_state.reset();

    match result {
        Ok(results) => {
            tracing::info!(count = results.len(), "search finished");
            ctx.notifications.clear_search_errors();

            let toast = Notification::success("notification-search-success")
                .with_arg("count", results.len().to_string());
            let toast = match subject {
                SearchSubject::Text(query) => toast
                    .with_description("notification-searched-for")
                    .with_description_arg("query", query),
                SearchSubject::Image => toast.with_description("notification-searched-by-image"),
            };
            ctx.notifications.push(toast);

            *ctx.results = results;
            load_thumbnails(ctx, generation)
        }
        Err(error) => {
            tracing::error!(%error, "search failed");
            ctx.results.clear();
            ctx.notifications.push(
                Notification::error(error.i18n_key())
                    .with_description("notification-error-description")
                    .with_description_arg("description", error.description()),
            );
            Task::none()
        }
    }
}

fn load_thumbnails(ctx: &mut UpdateContext<'_>, generation: u64) -> Task<Message> {
    let Some(client) = ctx.client.cloned() else {
        return Task::none();
    };

    let missing = ctx
        .thumbnails
        .missing(ctx.results.iter().map(|result| result.image_url.as_str()));
    // Every card of this search keeps its image, however long the list.
    ctx.thumbnails.fit(ctx.results.len());
    if missing.is_empty() {
        return Task::none();
    }

    tracing::debug!(count = missing.len(), "downloading result images");
    Task::stream(thumbnails::fetch_thumbnails(client, missing)).map(move |(url, result)| {
        Message::ThumbnailLoaded {
            generation,
            url,
            result,
        }
    })
}

/// Stores a downloaded result image unless a newer search replaced the list.
pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    url: String,
    result: Result<Handle, SearchError>,
) {
    if generation != *ctx.generation {
        return;
    }

    match result {
        Ok(handle) => ctx.thumbnails.insert(url, handle),
        Err(error) => tracing::debug!(%url, %error, "result image unavailable"),
    }
}

pub fn handle_mode_toggle_message(ctx: &mut UpdateContext<'_>, message: mode_toggle::Message) {
    if let mode_toggle::Event::ModeChanged(mode) = mode_toggle::update(message, ctx.mode) {
        tracing::debug!(?mode, "search mode changed");
    }
}

pub fn handle_text_search_message(
    ctx: &mut UpdateContext<'_>,
    message: text_search::Message,
) -> Task<Message> {
    match text_search::update(message, ctx.query, *ctx.is_loading) {
        TextSearchEvent::None => Task::none(),
        TextSearchEvent::Search => handle_search(ctx),
    }
}

pub fn handle_image_search_message(
    ctx: &mut UpdateContext<'_>,
    message: image_search::Message,
) -> Task<Message> {
    // Window-level file drops only make sense while the drop zone is shown.
    let is_window_event = matches!(
        message,
        image_search::Message::FileDropped(_)
            | image_search::Message::FileHovered
            | image_search::Message::HoverLeft
    );
    if is_window_event && *ctx.mode != SearchMode::Image {
        return Task::none();
    }

    match image_search::update(ctx.image_search, message, *ctx.is_loading) {
        ImageSearchEvent::None => Task::none(),
        ImageSearchEvent::OpenPicker => {
            open_image_dialog(ctx.persisted.last_open_directory.clone())
        }
        ImageSearchEvent::ReadFile(path) => read_image_file(path),
        ImageSearchEvent::Selected(path) => {
            persistence::remember_image_directory(ctx.persisted, &path, ctx.notifications);
            Task::none()
        }
        ImageSearchEvent::ReadFailed { path, error } => {
            tracing::warn!(path = %path.display(), %error, "failed to read image");
            ctx.notifications.push(
                Notification::warning("notification-image-read-error")
                    .with_description("notification-error-description")
                    .with_description_arg("description", error),
            );
            Task::none()
        }
        ImageSearchEvent::Search => handle_search(ctx),
    }
}

/// Opens the native file picker, starting in the last used folder.
fn open_image_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("Images", image_search::PICKER_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        |path| Message::ImageSearch(image_search::Message::FileChosen(path)),
    )
}

fn read_image_file(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let result = tokio::fs::read(&path)
                .await
                .map(Arc::new)
                .map_err(|e| e.to_string());
            (path, result)
        },
        |(path, result)| Message::ImageSearch(image_search::Message::FileRead { path, result }),
    )
}

pub fn handle_result_count_message(ctx: &mut UpdateContext<'_>, message: result_count::Message) {
    if let result_count::Event::Changed(count) = result_count::update(ctx.result_count, message) {
        tracing::trace!(count = count.value(), "result count changed");
    }
}

pub fn handle_empty_state_message(ctx: &mut UpdateContext<'_>, message: empty_state::Message) {
    match empty_state::update(message) {
        EmptyStateEvent::UseExample(query) => {
            *ctx.mode = SearchMode::Text;
            *ctx.query = query;
        }
    }
}
