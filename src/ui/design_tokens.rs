// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing and elevation used by the gallery page.

## Organization

- **Palette**: Base colors
- **Spacing**: Paddings around the wall, caption and controls
- **Typography**: Font sizes
- **Radius**: Border radii
- **Shadow**: Elevation of the wall and caption surfaces

## Examples

```
use art_space::ui::design_tokens::{palette, spacing};

let page_background = palette::MINT_50;
let padding = spacing::GUTTER; // 20px
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Page surfaces
    pub const MINT_50: Color = Color::from_rgb8(222, 255, 244);
    pub const PINE_900: Color = Color::from_rgb8(18, 38, 32);
    pub const PINE_800: Color = Color::from_rgb8(30, 56, 48);

    // Controls (green scale)
    pub const GREEN_400: Color = Color::from_rgb8(38, 199, 115);
    pub const GREEN_500: Color = Color::from_rgb8(9, 177, 89);
    pub const GREEN_700: Color = Color::from_rgb8(6, 128, 64);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const SHADOW: f32 = 0.35;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    /// Inner padding of the wall and caption surfaces.
    pub const FRAME: f32 = 16.0;
    /// Margin between surfaces and the page edge, and above the controls.
    pub const GUTTER: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Artwork title.
    pub const TITLE: f32 = 22.0;
    /// Artist line and button labels.
    pub const BODY: f32 = 16.0;
    /// Page indicator.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const BUTTON: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Elevation of the wall and caption.
    pub const ELEVATED: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::FRAME > 0.0);
    assert!(spacing::GUTTER > spacing::FRAME);
    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < opacity::OPAQUE);
};
