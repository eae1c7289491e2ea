// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (cards, drop zone, result count track)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use person_lens::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Dim a result image behind the score badge
let badge_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let gutter = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.1, 0.12);
    pub const GRAY_800: Color = Color::from_rgb(0.14, 0.15, 0.18);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.31, 0.34);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.46, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.82, 0.83, 0.86);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.96);

    // Brand colors (indigo scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.88, 0.9, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.51, 0.55, 0.97);
    pub const PRIMARY_500: Color = Color::from_rgb(0.39, 0.4, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.27, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.26, 0.22, 0.79);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Skeleton card fill at the bottom of its pulse.
    pub const SKELETON_MIN: f32 = 0.35;

    /// Skeleton card fill at the top of its pulse.
    pub const SKELETON_MAX: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Widest the search form may grow.
    pub const FORM_MAX_WIDTH: f32 = 720.0;

    // Image search
    pub const DROP_ZONE_HEIGHT: f32 = 180.0;
    pub const PREVIEW_HEIGHT: f32 = 160.0;

    // Result count control
    pub const COUNT_INPUT_WIDTH: f32 = 96.0;
    pub const COUNT_TRACK_HEIGHT: f32 = 24.0;
    pub const COUNT_TRACK_THICKNESS: f32 = 4.0;
    pub const COUNT_THUMB_RADIUS: f32 = 8.0;

    // Result grid
    pub const CARD_IMAGE_HEIGHT: f32 = 240.0;
    pub const SKELETON_HEIGHT: f32 = 200.0;

    pub const TOAST_WIDTH: f32 = 340.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Wordmark and section headings
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Wordmark
    pub const TITLE_LG: f32 = 30.0;

    /// Results heading
    pub const TITLE_MD: f32 = 20.0;

    /// Card titles
    pub const TITLE_SM: f32 = 16.0;

    /// Form inputs
    pub const BODY_LG: f32 = 15.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, min/max labels, metadata rows
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Cards, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Drop zone, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SKELETON_MIN < opacity::SKELETON_MAX);

    assert!(sizing::COUNT_THUMB_RADIUS * 2.0 <= sizing::COUNT_TRACK_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
