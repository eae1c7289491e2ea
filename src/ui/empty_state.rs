// SPDX-License-Identifier: MPL-2.0
//! Hint and example queries shown before the first search.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, Column, Row, Text};
use iced::{alignment, Element, Theme};

/// Example descriptions offered as one-click queries.
pub const EXAMPLE_QUERIES: [&str; 3] = ["bald guy with tattoos", "woman in red dress", "man with beard"];

#[derive(Debug, Clone)]
pub enum Message {
    ExamplePressed(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Switch to text mode and fill the query with this example.
    UseExample(String),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::ExamplePressed(query) => Event::UseExample(query.to_string()),
    }
}

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let hint = Text::new(i18n.tr("empty-state-hint"))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let chips = EXAMPLE_QUERIES
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &query| {
            row.push(
                button(Text::new(format!("\"{query}\"")).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::ExamplePressed(query))
                    .style(styles::button::chip),
            )
        })
        .wrap();

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icons::magnifier(), sizing::ICON_XL))
        .push(hint)
        .push(chips)
        .into()
}
