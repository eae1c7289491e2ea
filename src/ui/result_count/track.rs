// SPDX-License-Identifier: MPL-2.0
//! Canvas track for the result count: a horizontal bar with a draggable
//! thumb.

use super::Message;
use crate::search::ResultCount;
use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Canvas program drawing the track for a given value.
pub struct Track {
    value: ResultCount,
}

/// Drag state kept by the canvas between events.
#[derive(Debug, Default)]
pub struct DragState {
    dragging: bool,
}

impl Track {
    pub fn new(value: ResultCount) -> Self {
        Self { value }
    }

    pub fn into_element<'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::COUNT_TRACK_HEIGHT))
            .into()
    }
}

/// Usable horizontal span of the track; the thumb never pokes past the ends.
fn usable_span(bounds: Rectangle) -> (f32, f32) {
    let start = sizing::COUNT_THUMB_RADIUS;
    let width = (bounds.width - 2.0 * sizing::COUNT_THUMB_RADIUS).max(1.0);
    (start, width)
}

/// Converts an absolute cursor x into a fraction of the track.
pub(super) fn fraction_at(bounds: Rectangle, cursor_x: f32) -> f32 {
    let (start, width) = usable_span(bounds);
    ((cursor_x - bounds.x - start) / width).clamp(0.0, 1.0)
}

impl canvas::Program<Message> for Track {
    type State = DragState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                state.dragging = true;
                Some(
                    Action::publish(Message::TrackDragged(fraction_at(bounds, position.x)))
                        .and_capture(),
                )
            }
            // Dragging keeps following the pointer even outside the track.
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) if state.dragging => Some(
                Action::publish(Message::TrackDragged(fraction_at(bounds, position.x)))
                    .and_capture(),
            ),
            iced::Event::Mouse(
                mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft,
            ) if state.dragging => {
                state.dragging = false;
                Some(Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();
        let (start, width) = usable_span(bounds);
        let center_y = bounds.height / 2.0;
        let thickness = sizing::COUNT_TRACK_THICKNESS;

        let rail = Path::rounded_rectangle(
            Point::new(start, center_y - thickness / 2.0),
            Size::new(width, thickness),
            (thickness / 2.0).into(),
        );
        frame.fill(
            &rail,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette.background.strong.color
            },
        );

        let thumb_x = start + width * self.value.fraction();
        let filled = Path::rounded_rectangle(
            Point::new(start, center_y - thickness / 2.0),
            Size::new(thumb_x - start, thickness),
            (thickness / 2.0).into(),
        );
        frame.fill(&filled, palette.primary.base.color);

        let hovered = state.dragging || cursor.is_over(bounds);
        let thumb_radius = if hovered {
            sizing::COUNT_THUMB_RADIUS
        } else {
            sizing::COUNT_THUMB_RADIUS - 1.0
        };
        let thumb = Path::circle(Point::new(thumb_x, center_y), thumb_radius);
        frame.fill(&thumb, palette.primary.strong.color);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle {
            x: 100.0,
            y: 50.0,
            width: 216.0,
            height: sizing::COUNT_TRACK_HEIGHT,
        }
    }

    #[test]
    fn fraction_accounts_for_track_offset_and_thumb_inset() {
        let b = bounds();
        assert_eq!(fraction_at(b, b.x + sizing::COUNT_THUMB_RADIUS), 0.0);
        assert_eq!(
            fraction_at(b, b.x + b.width - sizing::COUNT_THUMB_RADIUS),
            1.0
        );
        assert!((fraction_at(b, b.x + b.width / 2.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fraction_is_clamped_outside_the_track() {
        let b = bounds();
        assert_eq!(fraction_at(b, 0.0), 0.0);
        assert_eq!(fraction_at(b, 10_000.0), 1.0);
    }
}
