// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Full-window page background.
pub fn page(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Elevated surface holding the artwork or its caption.
pub fn elevated(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: shadow::ELEVATED,
        ..Default::default()
    }
}
