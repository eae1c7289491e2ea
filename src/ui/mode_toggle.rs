// SPDX-License-Identifier: MPL-2.0
//! Text/image search mode selector.

use crate::i18n::fluent::I18n;
use crate::search::SearchMode;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mode: SearchMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(SearchMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ModeChanged(SearchMode),
}

pub fn update(message: Message, mode: &mut SearchMode) -> Event {
    match message {
        Message::Select(selected) if selected != *mode => {
            *mode = selected;
            Event::ModeChanged(selected)
        }
        Message::Select(_) => Event::None,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(mode_button(ctx.i18n.tr("mode-text"), SearchMode::Text, ctx.mode))
        .push(mode_button(ctx.i18n.tr("mode-image"), SearchMode::Image, ctx.mode))
        .into()
}

fn mode_button<'a>(label: String, mode: SearchMode, current: SearchMode) -> Element<'a, Message> {
    let is_selected = mode == current;
    // Selected buttons sit on the brand color, so the icon follows the label.
    let icon = if is_selected {
        icons::tinted(icon_for(mode), sizing::ICON_SM, iced::Color::WHITE)
    } else {
        icons::sized(icon_for(mode), sizing::ICON_SM)
    };

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(Text::new(label).size(typography::BODY));

    button(content)
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::Select(mode))
        .style(if is_selected {
            styles::button::selected
        } else {
            styles::button::unselected
        })
        .into()
}

fn icon_for(mode: SearchMode) -> Svg<'static> {
    match mode {
        SearchMode::Text => icons::text_lines(),
        SearchMode::Image => icons::photo(),
    }
}
