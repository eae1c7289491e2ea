// SPDX-License-Identifier: MPL-2.0
//! A single result card: image with score badge, title and a metadata
//! disclosure.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::search::{MetadataField, SearchResult};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, text, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, font, ContentFit, Element, Font, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub index: usize,
    pub result: &'a SearchResult,
    pub thumbnail: Option<&'a Handle>,
    pub expanded: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.result.title.as_str())
        .size(typography::TITLE_SM)
        .font(Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        });

    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(image_area(&ctx))
        .push(title)
        .push(disclosure_toggle(&ctx));

    if ctx.expanded {
        body = body.push(metadata_rows(&ctx));
    }

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

fn image_area<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(
            Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(icons::sized(icons::person(), sizing::ICON_XL))
                .push(Text::new(ctx.i18n.tr("image-placeholder")).size(typography::CAPTION)),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_placeholder)
        .into(),
    };

    let badge = Container::new(
        Text::new(format!("{}%", ctx.result.score_percent())).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::score_badge);

    let badge_layer = Container::new(badge)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::XS);

    Stack::new().push(picture).push(badge_layer).into()
}

fn disclosure_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let chevron = if ctx.expanded {
        icons::chevron_up()
    } else {
        icons::chevron_down()
    };

    let content = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("metadata-toggle")).size(typography::CAPTION))
        .push(icons::sized(chevron, sizing::ICON_SM));

    button(content)
        .padding([spacing::XXS, 0.0])
        .on_press(Message::ToggleMetadata(ctx.index))
        .style(styles::button::ghost)
        .into()
}

fn metadata_rows<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let muted = |theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    };

    let entries: Vec<(String, String)> = ctx
        .result
        .metadata
        .iter()
        .flat_map(|metadata| metadata.entries())
        .map(|(field, value)| (field_label(ctx.i18n, field), value.to_string()))
        .collect();

    if entries.is_empty() {
        return Text::new(ctx.i18n.tr("metadata-empty"))
            .size(typography::CAPTION)
            .style(muted)
            .into();
    }

    entries
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, (label, value)| {
            column.push(
                Row::new()
                    .push(Text::new(label).size(typography::CAPTION).style(muted))
                    .push(Space::new().width(Length::Fill))
                    .push(Text::new(value).size(typography::CAPTION)),
            )
        })
        .into()
}

/// Row label: a translated name for known identifiers, the raw key otherwise.
fn field_label(i18n: &I18n, field: MetadataField<'_>) -> String {
    match (field.i18n_key(), field) {
        (Some(key), _) => i18n.tr(key),
        (None, MetadataField::Other(key)) => key.to_string(),
        (None, _) => String::new(),
    }
}
