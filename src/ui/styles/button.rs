// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::is_light;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (search buttons).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let brand = theme.palette().primary;

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(brand)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Style for selected/active button state.
/// Use this for the active entry of a toggle group.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => disabled_style(theme),
        _ => button::Style {
            background: Some(Background::Color(theme.palette().primary)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Style for unselected/secondary button state.
/// Adapts to light/dark theme while maintaining consistency.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let light = is_light(theme);

    let (bg_color, text_color) = if light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_800, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color,
            border: Border {
                color: theme.palette().primary,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Pill-shaped suggestion chip.
pub fn chip(theme: &Theme, status: button::Status) -> button::Style {
    let base = unselected(theme, status);
    button::Style {
        border: Border {
            radius: radius::FULL.into(),
            ..base.border
        },
        ..base
    }
}

/// Borderless text button (disclosure toggles, dismiss buttons).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().primary;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn disabled_style(theme: &Theme) -> button::Style {
    button::Style {
        background: Some(Background::Color(if is_light(theme) {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
