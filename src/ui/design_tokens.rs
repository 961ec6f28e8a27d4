// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the DocExtract shell.

## Organization

- **Palette**: Base and semantic colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use doc_extract::ui::design_tokens::{palette, spacing};
use iced::Color;

let muted = Color { a: 0.6, ..palette::GRAY_700 };
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.32, 0.36);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.6);

    // Brand (indigo scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.45, 0.47, 0.96);
    pub const PRIMARY_500: Color = Color::from_rgb(0.31, 0.33, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.26, 0.27, 0.8);

    // Sidebar
    pub const SIDEBAR_BG: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const SIDEBAR_ACCENT: Color = Color::from_rgb(0.14, 0.17, 0.26);

    // Semantic colors
    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.62, 0.04);
    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.7, 0.4);
    pub const ERROR_500: Color = Color::from_rgb(0.9, 0.22, 0.21);
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
    pub const HEADER_HEIGHT: f32 = 64.0;
    pub const SIDEBAR_WIDTH: f32 = 256.0;
    pub const AVATAR: f32 = 32.0;
    pub const CARD_WIDTH: f32 = 320.0;
    pub const MENU_WIDTH: f32 = 180.0;
    pub const UPLOAD_AREA_HEIGHT: f32 = 220.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero heading on the landing page
    pub const DISPLAY: f32 = 40.0;

    /// Large title - Page headings
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - Brand, card headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers, top bar
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Subtitles
    pub const BODY_LG: f32 = 16.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, timestamps, table headers
    pub const CAPTION: f32 = 12.0;
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
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.12,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
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

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::SIDEBAR_WIDTH > sizing::MENU_WIDTH);
};
