// SPDX-License-Identifier: MPL-2.0
//! Controller button styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Rounded green button used for Next / Previous.
pub fn controller(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => colors.control_hover,
            button::Status::Pressed => colors.control_pressed,
            button::Status::Active | button::Status::Disabled => colors.control,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.control_text,
            border: Border {
                radius: radius::BUTTON.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_and_press_change_background() {
        let colors = ColorScheme::light();
        let style = controller(colors);
        let theme = Theme::Light;

        let active = style(&theme, button::Status::Active);
        let hovered = style(&theme, button::Status::Hovered);
        let pressed = style(&theme, button::Status::Pressed);

        assert_eq!(active.background, Some(Background::Color(colors.control)));
        assert_eq!(hovered.background, Some(Background::Color(colors.control_hover)));
        assert_eq!(pressed.background, Some(Background::Color(colors.control_pressed)));
        assert_eq!(active.text_color, colors.control_text);
    }
}
