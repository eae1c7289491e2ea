// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the search page: wordmark, search form, then either the example
//! queries (before the first search) or the result grid, with toasts on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::search::thumbnails::ThumbnailCache;
use crate::search::{SearchMode, SearchResult};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{self, Toast};
use crate::ui::{
    empty_state, image_search, logo, mode_toggle, result_count, results, styles, text_search,
};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mode: SearchMode,
    pub query: &'a str,
    pub image_search: &'a image_search::State,
    pub result_count: &'a result_count::State,
    pub results: &'a [SearchResult],
    pub results_state: &'a results::State,
    pub thumbnails: &'a ThumbnailCache,
    pub is_loading: bool,
    pub has_searched: bool,
    pub window_width: f32,
    pub animation: f32,
    pub notifications: &'a notifications::Manager,
}

/// Renders the search page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(logo::view(ctx.i18n))
        .push(search_form(&ctx));

    if !ctx.has_searched && !ctx.is_loading {
        page = page.push(empty_state::view(ctx.i18n).map(Message::EmptyState));
    }

    page = page.push(
        results::view(results::ViewContext {
            i18n: ctx.i18n,
            state: ctx.results_state,
            results: ctx.results,
            thumbnails: ctx.thumbnails,
            is_loading: ctx.is_loading,
            width: ctx.window_width,
            animation: ctx.animation,
        })
        .map(Message::Results),
    );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            scrollable(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn search_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input: Element<'a, Message> = match ctx.mode {
        SearchMode::Text => text_search::view(text_search::ViewContext {
            i18n: ctx.i18n,
            query: ctx.query,
            is_loading: ctx.is_loading,
        })
        .map(Message::TextSearch),
        SearchMode::Image => image_search::view(image_search::ViewContext {
            i18n: ctx.i18n,
            state: ctx.image_search,
            is_loading: ctx.is_loading,
        })
        .map(Message::ImageSearch),
    };

    let form = Column::new()
        .spacing(spacing::LG)
        .push(
            mode_toggle::view(mode_toggle::ViewContext {
                i18n: ctx.i18n,
                mode: ctx.mode,
            })
            .map(Message::ModeToggle),
        )
        .push(input)
        .push(
            result_count::view(result_count::ViewContext {
                i18n: ctx.i18n,
                state: ctx.result_count,
            })
            .map(Message::ResultCount),
        );

    Container::new(form)
        .width(Length::Fill)
        .max_width(sizing::FORM_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}
