// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native window events (file drag and drop, resizes)
//! to the search page and drives the periodic tick.

use super::Message;
use crate::ui::image_search;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick interval while a search runs (spinner and skeleton animation).
const ANIMATION_TICK: Duration = Duration::from_millis(33);

/// Tick interval while only toasts are waiting to auto-dismiss.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Routes window events.
///
/// File drag and drop goes to the image search area, which only reacts in
/// image mode. Resizes update the grid column count.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => Some(
            Message::ImageSearch(image_search::Message::FileDropped(path)),
        ),
        event::Event::Window(iced::window::Event::FileHovered(_)) => {
            Some(Message::ImageSearch(image_search::Message::FileHovered))
        }
        event::Event::Window(iced::window::Event::FilesHoveredLeft) => {
            Some(Message::ImageSearch(image_search::Message::HoverLeft))
        }
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for the loading animation and
/// notification auto-dismiss.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
