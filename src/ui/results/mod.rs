// SPDX-License-Identifier: MPL-2.0
//! Result grid.
//!
//! Shows pulsing skeleton cards while a search is running, then one card per
//! result in a grid whose column count follows the window width.

mod card;

use crate::i18n::fluent::I18n;
use crate::search::thumbnails::ThumbnailCache;
use crate::search::SearchResult;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};
use std::collections::HashSet;

/// Number of skeleton cards shown while loading.
pub const SKELETON_COUNT: usize = 8;

/// Returns the number of grid columns for a given available width.
pub fn columns_for_width(width: f32) -> usize {
    if width < 768.0 {
        2
    } else if width < 1024.0 {
        3
    } else if width < 1280.0 {
        4
    } else {
        5
    }
}

/// Which cards have their metadata expanded, by position in the result list.
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<usize>,
}

impl State {
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Collapses every card; called whenever the result list is replaced.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub results: &'a [SearchResult],
    pub thumbnails: &'a ThumbnailCache,
    pub is_loading: bool,
    /// Window width in logical pixels; picks the column count.
    pub width: f32,
    /// Loading animation phase in radians; drives the spinner and the
    /// skeleton pulse.
    pub animation: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMetadata(usize),
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::ToggleMetadata(index) => {
            if !state.expanded.remove(&index) {
                state.expanded.insert(index);
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.is_loading {
        return loading_view(&ctx);
    }
    if ctx.results.is_empty() {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    }

    let heading = Text::new(ctx.i18n.tr_with_args(
        "results-heading",
        &[("count", ctx.results.len().to_string().as_str())],
    ))
    .size(typography::TITLE_MD);

    let cards: Vec<Element<'a, Message>> = ctx
        .results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            card::view(card::ViewContext {
                i18n: ctx.i18n,
                index,
                result,
                thumbnail: ctx.thumbnails.peek(&result.image_url),
                expanded: ctx.state.is_expanded(index),
            })
        })
        .collect();

    Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(grid(cards, columns_for_width(ctx.width)))
        .into()
}

fn loading_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // 0.0..=1.0, one full pulse per spinner turn
    let pulse = (1.0 - ctx.animation.cos()) / 2.0;
    let alpha = opacity::SKELETON_MIN + (opacity::SKELETON_MAX - opacity::SKELETON_MIN) * pulse;

    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            AnimatedSpinner::new(palette::PRIMARY_500, ctx.animation)
                .size(sizing::ICON_MD)
                .into_element(),
        )
        .push(
            Text::new(ctx.i18n.tr("results-searching"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    let skeletons: Vec<Element<'a, Message>> = (0..SKELETON_COUNT)
        .map(|_| {
            Container::new(Space::new().width(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::SKELETON_HEIGHT))
                .style(styles::container::skeleton(alpha))
                .into()
        })
        .collect();

    Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(grid(skeletons, columns_for_width(ctx.width)))
        .into()
}

/// Lays cells out in rows of `columns`, padding the last row so every cell
/// keeps the same width.
fn grid<'a>(cells: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::MD);
    let mut row = Row::new().spacing(spacing::MD);
    let mut in_row = 0;

    for cell in cells {
        row = row.push(Container::new(cell).width(Length::FillPortion(1)));
        in_row += 1;
        if in_row == columns {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::MD);
            in_row = 0;
        }
    }

    if in_row > 0 {
        for _ in in_row..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_follows_breakpoints() {
        assert_eq!(columns_for_width(400.0), 2);
        assert_eq!(columns_for_width(767.9), 2);
        assert_eq!(columns_for_width(768.0), 3);
        assert_eq!(columns_for_width(1023.0), 3);
        assert_eq!(columns_for_width(1024.0), 4);
        assert_eq!(columns_for_width(1280.0), 5);
        assert_eq!(columns_for_width(2560.0), 5);
    }

    #[test]
    fn toggling_metadata_flips_only_that_card() {
        let mut state = State::default();
        update(&mut state, Message::ToggleMetadata(2));
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(0));

        update(&mut state, Message::ToggleMetadata(2));
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn reset_collapses_everything() {
        let mut state = State::default();
        update(&mut state, Message::ToggleMetadata(0));
        update(&mut state, Message::ToggleMetadata(5));
        state.reset();
        assert!(!state.is_expanded(0));
        assert!(!state.is_expanded(5));
    }
}
