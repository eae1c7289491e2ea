// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    pub error: Color,
    pub success: Color,
    pub warning: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_700,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
            warning: palette::WARNING_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            surface_tertiary: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
            warning: palette::WARNING_500,
        }
    }

    /// Builds the `iced` palette the built-in widgets derive their styles from.
    #[must_use]
    pub fn to_palette(&self) -> Palette {
        Palette {
            background: self.surface_primary,
            text: self.text_primary,
            primary: self.brand_primary,
            success: self.success,
            warning: self.warning,
            danger: self.error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    #[must_use]
    pub fn color_scheme(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    /// The window theme for this mode.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        let name = if self.is_dark() {
            "Person Lens Dark"
        } else {
            "Person Lens Light"
        };
        Theme::custom(name.to_string(), self.color_scheme().to_palette())
    }
}

/// Whether `theme` renders light surfaces.
#[must_use]
pub fn is_light(theme: &Theme) -> bool {
    !theme.extended_palette().is_dark
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn both_themes_use_a_blue_brand() {
        assert!(ColorScheme::light().brand_primary.b > ColorScheme::light().brand_primary.r);
        assert!(ColorScheme::dark().brand_primary.b > ColorScheme::dark().brand_primary.r);
    }

    #[test]
    fn explicit_modes_map_to_matching_themes() {
        assert!(is_light(&ThemeMode::Light.to_theme()));
        assert!(!is_light(&ThemeMode::Dark.to_theme()));
        // System mode depends on the desktop, so only check it does not panic
        let _ = ThemeMode::System.to_theme();
    }
}
