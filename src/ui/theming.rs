// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes for the gallery page.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Page background.
    pub page: Color,
    /// Wall and caption surfaces.
    pub surface: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    /// Controller buttons.
    pub control: Color,
    pub control_hover: Color,
    pub control_pressed: Color,
    pub control_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page: palette::MINT_50,
            surface: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            control: palette::GREEN_500,
            control_hover: palette::GREEN_400,
            control_pressed: palette::GREEN_700,
            control_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page: palette::PINE_900,
            surface: palette::PINE_800,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            control: palette::GREEN_500,
            control_hover: palette::GREEN_400,
            control_pressed: palette::GREEN_700,
            control_text: palette::WHITE,
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
            // Light is the original look, so it wins when detection fails.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    /// Base Iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
