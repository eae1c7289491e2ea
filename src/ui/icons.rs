// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small stroke-based SVG documents embedded as string constants.
//! Handles are cached using `OnceLock` so each document is parsed once, and
//! every icon is tinted at render time so one set serves light and dark themes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let clear_button = button(icons::sized(icons::cross(), sizing::ICON_SM));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `clear_image`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Defines an icon function returning an [`Svg`] with a cached handle.
///
/// The body is wrapped in a 24x24 viewbox with round strokes in
/// `currentColor`; only the shapes need to be given.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            const DATA: &str = concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                $body,
                "</svg>"
            );
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Search Icons
// =============================================================================

define_icon!(
    magnifier,
    r#"<circle cx="11" cy="11" r="7"/><line x1="21" y1="21" x2="16.65" y2="16.65"/>"#,
    "Magnifier icon: lens with handle."
);
define_icon!(
    text_lines,
    r#"<line x1="4" y1="6" x2="20" y2="6"/><line x1="4" y1="12" x2="20" y2="12"/><line x1="4" y1="18" x2="14" y2="18"/>"#,
    "Text icon: three horizontal lines."
);
define_icon!(
    photo,
    r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="8.5" cy="8.5" r="1.5"/><polyline points="21 15 16 10 5 21"/>"#,
    "Photo icon: framed landscape."
);
define_icon!(
    upload,
    r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="17 8 12 3 7 8"/><line x1="12" y1="3" x2="12" y2="15"/>"#,
    "Upload icon: arrow leaving a tray."
);
define_icon!(
    person,
    r#"<circle cx="12" cy="8" r="4"/><path d="M4 21v-1a7 7 0 0 1 16 0v1"/>"#,
    "Person icon: head and shoulders."
);

// =============================================================================
// Control Icons
// =============================================================================

define_icon!(plus, r#"<line x1="12" y1="5" x2="12" y2="19"/><line x1="5" y1="12" x2="19" y2="12"/>"#, "Plus icon.");
define_icon!(minus, r#"<line x1="5" y1="12" x2="19" y2="12"/>"#, "Minus icon.");
define_icon!(
    cross,
    r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#,
    "Cross icon: X mark shape."
);
define_icon!(chevron_down, r#"<polyline points="6 9 12 15 18 9"/>"#, "Chevron pointing down.");
define_icon!(chevron_up, r#"<polyline points="18 15 12 9 6 15"/>"#, "Chevron pointing up.");

// =============================================================================
// Notification Icons
// =============================================================================

define_icon!(
    checkmark,
    r#"<circle cx="12" cy="12" r="10"/><polyline points="8 12 11 15 16 9"/>"#,
    "Checkmark icon: tick in a circle."
);
define_icon!(
    info,
    r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/>"#,
    "Info icon: letter 'i' in circle."
);
define_icon!(
    warning,
    r#"<path d="M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/>"#,
    "Warning icon: exclamation mark in a triangle."
);

// =============================================================================
// Helpers
// =============================================================================

/// Sizes an icon and tints it with the theme's text color.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(|theme: &Theme, _status| svg::Style {
            color: Some(theme.palette().text),
        })
}

/// Sizes an icon and tints it with a fixed color.
pub fn tinted(icon: Svg<'static>, size: f32, color: Color) -> Svg<'static> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
