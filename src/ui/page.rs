// SPDX-License-Identifier: MPL-2.0
//! The single gallery page: artwork wall, caption and Next/Previous controls.
//!
//! The page is stateless. It renders whatever entry the
//! [`GalleryController`](crate::application::GalleryController) currently
//! points at and emits [`Message`]s for the application to apply.

use crate::domain::ArtworkEntry;
use crate::i18n::fluent::I18n;
use crate::ui::artwork;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::font::{Style as FontStyle, Weight};
use iced::widget::{button, Column, Container, Row, Svg, Text};
use iced::{Element, Font, Length, Padding};

/// Messages emitted by the page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Previous,
}

/// Everything the page needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entry: &'a ArtworkEntry,
    pub colors: ColorScheme,
    /// `(page, total)` when the indicator is enabled.
    pub page_indicator: Option<(usize, usize)>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .push(artwork_wall(&ctx))
        .push(artwork_descriptor(&ctx))
        .push(display_controller(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .style(styles::container::page(ctx.colors))
        .into()
}

fn artwork_wall<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let image = Svg::new(artwork::resolve(ctx.entry.image))
        .width(Length::Fill)
        .height(Length::Fill);

    let frame = Container::new(image)
        .padding(spacing::FRAME)
        .style(styles::container::elevated(ctx.colors));

    Container::new(frame)
        .padding(spacing::GUTTER)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn artwork_descriptor<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.text(ctx.entry.title))
        .size(typography::TITLE)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .color(ctx.colors.text_primary)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    let artist = Text::new(ctx.i18n.text(ctx.entry.artist))
        .size(typography::BODY)
        .font(Font {
            style: FontStyle::Italic,
            ..Font::default()
        })
        .color(ctx.colors.text_secondary)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    let mut caption = Column::new()
        .push(title)
        .push(artist)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    if let Some((current, total)) = ctx.page_indicator {
        let indicator = ctx.i18n.tr_with_args(
            "page-indicator",
            &[("current", &current.to_string()), ("total", &total.to_string())],
        );
        caption = caption.push(
            Text::new(indicator)
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );
    }

    let surface = Container::new(caption)
        .padding(spacing::FRAME)
        .width(Length::Fill)
        .style(styles::container::elevated(ctx.colors));

    Container::new(surface)
        .padding(Padding {
            top: 0.0,
            right: spacing::GUTTER,
            bottom: 0.0,
            left: spacing::GUTTER,
        })
        .width(Length::Fill)
        .into()
}

fn display_controller<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .push(controller_button(ctx, "next", Message::Next))
        .push(controller_button(ctx, "previous", Message::Previous))
        .width(Length::Fill)
        .padding(Padding {
            top: spacing::GUTTER,
            right: 0.0,
            bottom: spacing::GUTTER,
            left: 0.0,
        })
        .into()
}

fn controller_button<'a>(
    ctx: &ViewContext<'a>,
    label_key: &str,
    on_press: Message,
) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(label_key))
        .size(typography::BODY)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    let control = button(label)
        .width(Length::Fill)
        .padding(spacing::FRAME / 2.0)
        .style(styles::button::controller(ctx.colors))
        .on_press(on_press);

    Container::new(control)
        .padding(Padding {
            top: 0.0,
            right: spacing::GUTTER,
            bottom: 0.0,
            left: spacing::GUTTER,
        })
        .width(Length::FillPortion(1))
        .into()
}
