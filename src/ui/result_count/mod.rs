// SPDX-License-Identifier: MPL-2.0
//! Result count control: numeric field, step buttons and a draggable track.
//!
//! The field keeps the raw text being typed (`draft`) separately from the
//! clamped value. Typed text that parses updates the value immediately;
//! [`State::commit`] rewrites the field to the clamped value and is called
//! on Enter and whenever the user interacts with another part of the page.

mod track;

use crate::app::config::{MAX_RESULT_COUNT, MIN_RESULT_COUNT};
use crate::i18n::fluent::I18n;
use crate::search::ResultCount;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};
use track::Track;

#[derive(Debug, Clone)]
pub struct State {
    value: ResultCount,
    draft: String,
}

impl State {
    pub fn new(value: ResultCount) -> Self {
        Self {
            value,
            draft: value.to_string(),
        }
    }

    pub fn value(&self) -> ResultCount {
        self.value
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Rewrites the field to the current value. Returns `true` when the
    /// displayed text changed.
    pub fn commit(&mut self) -> bool {
        let committed = self.value.to_string();
        if self.draft == committed {
            false
        } else {
            self.draft = committed;
            true
        }
    }

    fn set(&mut self, value: ResultCount) -> Event {
        self.draft = value.to_string();
        if value == self.value {
            Event::None
        } else {
            self.value = value;
            Event::Changed(value)
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(ResultCount::default())
    }
}

/// Contextual data needed to render the control.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    DraftSubmitted,
    Increment,
    Decrement,
    /// Pointer position on the track, as a fraction of its width.
    TrackDragged(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Changed(ResultCount),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::DraftChanged(draft) => {
            let parsed = ResultCount::parse_clamped(&draft);
            state.draft = draft;
            match parsed {
                Some(value) if value != state.value => {
                    state.value = value;
                    Event::Changed(value)
                }
                _ => Event::None,
            }
        }
        Message::DraftSubmitted => {
            state.commit();
            Event::None
        }
        Message::Increment => state.set(state.value.increment()),
        Message::Decrement => state.set(state.value.decrement()),
        Message::TrackDragged(fraction) => state.set(ResultCount::from_fraction(fraction)),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let value = ctx.state.value();

    let input = text_input("", ctx.state.draft())
        .on_input(Message::DraftChanged)
        .on_submit(Message::DraftSubmitted)
        .size(typography::BODY)
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fixed(sizing::COUNT_INPUT_WIDTH));

    let mut minus = button(icons::sized(icons::minus(), sizing::ICON_SM))
        .padding(spacing::XS)
        .style(styles::button::unselected);
    if !value.is_min() {
        minus = minus.on_press(Message::Decrement);
    }

    let mut plus = button(icons::sized(icons::plus(), sizing::ICON_SM))
        .padding(spacing::XS)
        .style(styles::button::unselected);
    if !value.is_max() {
        plus = plus.on_press(Message::Increment);
    }

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("result-count-label"))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(minus)
        .push(input)
        .push(plus);

    let caption = |label: String| {
        Text::new(label)
            .size(typography::CAPTION)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            })
    };
    let bounds = Row::new()
        .push(caption(MIN_RESULT_COUNT.to_string()))
        .push(Space::new().width(Length::Fill))
        .push(caption(MAX_RESULT_COUNT.to_string()));

    Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(Track::new(value).into_element())
        .push(bounds)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_a_number_updates_value_immediately() {
        let mut state = State::default();
        let event = update(&mut state, Message::DraftChanged("25".into()));
        assert_eq!(event, Event::Changed(ResultCount::new(25)));
        assert_eq!(state.draft(), "25");
    }

    #[test]
    fn out_of_range_text_is_clamped_and_rewritten_on_commit() {
        let mut state = State::default();
        update(&mut state, Message::DraftChanged("20000".into()));
        assert_eq!(state.value().value(), MAX_RESULT_COUNT);
        assert_eq!(state.draft(), "20000");

        update(&mut state, Message::DraftSubmitted);
        assert_eq!(state.draft(), "10000");
    }

    #[test]
    fn unparseable_text_keeps_previous_value() {
        let mut state = State::new(ResultCount::new(42));
        assert_eq!(update(&mut state, Message::DraftChanged(String::new())), Event::None);
        assert_eq!(state.value().value(), 42);
        assert!(state.commit());
        assert_eq!(state.draft(), "42");
        assert!(!state.commit());
    }

    #[test]
    fn zero_and_negative_clamp_to_minimum() {
        let mut state = State::default();
        update(&mut state, Message::DraftChanged("-5".into()));
        assert_eq!(state.value().value(), MIN_RESULT_COUNT);
    }

    #[test]
    fn step_buttons_stop_at_bounds() {
        let mut state = State::new(ResultCount::new(i64::from(MIN_RESULT_COUNT)));
        assert_eq!(update(&mut state, Message::Decrement), Event::None);
        assert_eq!(
            update(&mut state, Message::Increment),
            Event::Changed(ResultCount::new(2))
        );
        assert_eq!(state.draft(), "2");

        let mut state = State::new(ResultCount::new(i64::from(MAX_RESULT_COUNT)));
        assert_eq!(update(&mut state, Message::Increment), Event::None);
    }

    #[test]
    fn dragging_maps_fraction_onto_range() {
        let mut state = State::default();
        update(&mut state, Message::TrackDragged(1.0));
        assert_eq!(state.value().value(), MAX_RESULT_COUNT);
        update(&mut state, Message::TrackDragged(-0.3));
        assert_eq!(state.value().value(), MIN_RESULT_COUNT);
        assert_eq!(state.draft(), "1");
    }
}
