// SPDX-License-Identifier: MPL-2.0
//! Free-text description input and its search button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text_input, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the text search row.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a str,
    pub is_loading: bool,
}

/// Messages emitted by the text search row.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    /// Enter pressed inside the input.
    Submit,
    SearchPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Search,
}

/// Whether a search can be started from the current input.
pub fn can_search(query: &str, is_loading: bool) -> bool {
    !is_loading && !query.trim().is_empty()
}

pub fn update(message: Message, query: &mut String, is_loading: bool) -> Event {
    match message {
        Message::QueryChanged(value) => {
            *query = value;
            Event::None
        }
        Message::Submit | Message::SearchPressed if can_search(query.as_str(), is_loading) => {
            Event::Search
        }
        Message::Submit | Message::SearchPressed => Event::None,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("text-search-placeholder"), ctx.query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submit)
        .size(typography::BODY_LG)
        .padding(spacing::SM)
        .width(Length::Fill);

    let label = if ctx.is_loading {
        ctx.i18n.tr("search-button-loading")
    } else {
        ctx.i18n.tr("search-button")
    };

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(
            icons::magnifier(),
            sizing::ICON_SM,
            iced::Color::WHITE,
        ))
        .push(Text::new(label).size(typography::BODY));

    let mut search_button = button(content)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);
    if can_search(ctx.query, ctx.is_loading) {
        search_button = search_button.on_press(Message::SearchPressed);
    }

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(search_button)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_replaces_query() {
        let mut query = String::from("old");
        let event = update(Message::QueryChanged("bald guy".into()), &mut query, false);
        assert_eq!(event, Event::None);
        assert_eq!(query, "bald guy");
    }

    #[test]
    fn enter_on_blank_query_is_ignored() {
        let mut query = String::from("   ");
        assert_eq!(update(Message::Submit, &mut query, false), Event::None);
    }

    #[test]
    fn enter_with_query_searches() {
        let mut query = String::from("woman in red dress");
        assert_eq!(update(Message::Submit, &mut query, false), Event::Search);
    }

    #[test]
    fn button_ignores_blank_query() {
        let mut query = String::new();
        assert_eq!(update(Message::SearchPressed, &mut query, false), Event::None);
        query.push_str("man with beard");
        assert_eq!(update(Message::SearchPressed, &mut query, false), Event::Search);
    }

    #[test]
    fn nothing_starts_while_loading() {
        let mut query = String::from("man with beard");
        assert_eq!(update(Message::Submit, &mut query, true), Event::None);
        assert_eq!(update(Message::SearchPressed, &mut query, true), Event::None);
        assert!(!can_search("man with beard", true));
    }
}
