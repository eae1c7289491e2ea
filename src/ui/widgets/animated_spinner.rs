// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Number of line segments used to approximate the arc.
const ARC_SEGMENTS: u16 = 30;

/// Loading spinner drawn as a half circle rotating over a faint track.
pub struct AnimatedSpinner {
    rotation: f32, // radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_LG,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = (frame.width().min(frame.height()) / 2.0 - 3.0).max(1.0);
        let stroke_width = (self.size / 12.0).max(2.0);

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(stroke_width).with_color(Color {
                a: 0.25,
                ..self.color
            }),
        );

        // Half-circle arc starting at the top (-90°)
        let start_angle = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.move_to(point_on_circle(center, radius, start_angle));
            for i in 1..=ARC_SEGMENTS {
                let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                builder.line_to(point_on_circle(center, radius, start_angle + PI * t));
            }
        });

        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(stroke_width)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_points_lie_on_the_circle() {
        let center = Point::new(10.0, 10.0);
        for angle in [0.0, PI / 2.0, PI, 1.3] {
            let p = point_on_circle(center, 5.0, angle);
            let distance = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!((distance - 5.0).abs() < 1e-4);
        }
    }
}
