// SPDX-License-Identifier: MPL-2.0
//! Application wordmark shown above the search form.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{text, Column, Row, Text};
use iced::{alignment, font, Element, Font, Theme};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Renders the wordmark: an icon, the two-tone name and a tagline.
pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let icon = icons::sized(icons::person(), sizing::ICON_LG).style(|theme: &Theme, _status| {
        iced::widget::svg::Style {
            color: Some(theme.palette().primary),
        }
    });

    let name = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(
            Text::new(i18n.tr("logo-primary"))
                .size(typography::TITLE_LG)
                .font(BOLD)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().primary),
                }),
        )
        .push(
            Text::new(i18n.tr("logo-secondary"))
                .size(typography::TITLE_LG)
                .font(BOLD),
        );

    let tagline = Text::new(i18n.tr("logo-tagline"))
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(name)
        .push(tagline)
        .into()
}
