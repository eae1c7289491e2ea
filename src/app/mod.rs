// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the search page.
//!
//! The `App` struct wires together the page components, localization, the
//! search client and persisted session state, and translates messages into
//! side effects like HTTP requests or file reads. Component state stays in
//! the components; this file only decides what happens between them.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, SearchSubject};
pub use update::{preflight, SearchRequest};

use crate::i18n::fluent::I18n;
use crate::search::thumbnails::ThumbnailCache;
use crate::search::{SearchClient, SearchMode, SearchResult};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{image_search, result_count, results};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// `None` when no API base URL is configured; searches then report it.
    client: Option<SearchClient>,
    mode: SearchMode,
    query: String,
    image_search: image_search::State,
    result_count: result_count::State,
    results: Vec<SearchResult>,
    results_state: results::State,
    thumbnails: ThumbnailCache,
    is_loading: bool,
    /// Whether a search was started this session (hides the example queries).
    has_searched: bool,
    /// Incremented for every search sent. Responses and result images tagged
    /// with an older value are dropped.
    generation: u64,
    loading_started_at: Option<Instant>,
    /// Loading animation phase in radians.
    animation: f32,
    window_width: f32,
    /// Persisted application state (last image directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode)
            .field("has_client", &self.client.is_some())
            .field("results", &self.results.len())
            .field("is_loading", &self.is_loading)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            client: None,
            mode: SearchMode::default(),
            query: String::new(),
            image_search: image_search::State::default(),
            result_count: result_count::State::default(),
            results: Vec::new(),
            results_state: results::State::default(),
            thumbnails: ThumbnailCache::default(),
            is_loading: false,
            has_searched: false,
            generation: 0,
            loading_started_at: None,
            animation: 0.0,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from config, persisted state and the
    /// launcher flags, and checks the search service in the background.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let client = match config::resolve_api_base_url(flags.api_url.as_deref(), &config) {
            Some(url) => match SearchClient::new(&url) {
                Ok(client) => {
                    tracing::info!(base_url = client.base_url(), "search service configured");
                    Some(client)
                }
                Err(error) => {
                    tracing::warn!(%error, "search client unavailable");
                    None
                }
            },
            None => {
                tracing::warn!("no API base URL configured");
                None
            }
        };

        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            client,
            result_count: result_count::State::new(config.default_result_count()),
            thumbnails: ThumbnailCache::new(config.thumbnail_cache_size()),
            app_state,
            ..Self::default()
        };

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = match app.client.clone() {
            Some(client) => Task::perform(
                async move { client.health().await },
                Message::HealthChecked,
            ),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        if self.has_searched && !self.is_loading {
            self.i18n.tr_with_args(
                "window-title-with-results",
                &[("count", self.results.len().to_string().as_str())],
            )
        } else {
            self.i18n.tr("window-title")
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.is_loading,
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if message.is_page_interaction() {
            self.result_count.commit();
        }

        let was_loading = self.is_loading;
        let mut ctx = update::UpdateContext {
            client: self.client.as_ref(),
            mode: &mut self.mode,
            query: &mut self.query,
            image_search: &mut self.image_search,
            result_count: &mut self.result_count,
            results: &mut self.results,
            results_state: &mut self.results_state,
            thumbnails: &mut self.thumbnails,
            is_loading: &mut self.is_loading,
            has_searched: &mut self.has_searched,
            generation: &mut self.generation,
            persisted: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        let task = match message {
            Message::ModeToggle(mode_message) => {
                update::handle_mode_toggle_message(&mut ctx, mode_message);
                Task::none()
            }
            Message::TextSearch(text_message) => {
                update::handle_text_search_message(&mut ctx, text_message)
            }
            Message::ImageSearch(image_message) => {
                update::handle_image_search_message(&mut ctx, image_message)
            }
            Message::ResultCount(count_message) => {
                update::handle_result_count_message(&mut ctx, count_message);
                Task::none()
            }
            Message::Results(results_message) => {
                results::update(ctx.results_state, results_message);
                Task::none()
            }
            Message::EmptyState(empty_message) => {
                update::handle_empty_state_message(&mut ctx, empty_message);
                Task::none()
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SearchCompleted {
                generation,
                subject,
                result,
            } => update::handle_search_completed(&mut ctx, generation, subject, result),
            Message::ThumbnailLoaded {
                generation,
                url,
                result,
            } => {
                update::handle_thumbnail_loaded(&mut ctx, generation, url, result);
                Task::none()
            }
            Message::HealthChecked(result) => {
                if let Err(error) = result {
                    tracing::warn!(%error, "search service health check failed");
                    ctx.notifications.push(
                        Notification::warning("notification-health-unreachable")
                            .with_description("notification-error-description")
                            .with_description_arg("description", error.description()),
                    );
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick();
                if let Some(started) = self.loading_started_at {
                    self.animation =
                        now.saturating_duration_since(started).as_secs_f32() * std::f32::consts::TAU;
                }
                Task::none()
            }
        };

        match (was_loading, self.is_loading) {
            (false, true) => {
                self.loading_started_at = Some(Instant::now());
                self.animation = 0.0;
            }
            (true, false) => self.loading_started_at = None,
            _ => {}
        }

        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            mode: self.mode,
            query: &self.query,
            image_search: &self.image_search,
            result_count: &self.result_count,
            results: &self.results,
            results_state: &self.results_state,
            thumbnails: &self.thumbnails,
            is_loading: self.is_loading,
            has_searched: self.has_searched,
            window_width: self.window_width,
            animation: self.animation,
            notifications: &self.notifications,
        })
    }
}
