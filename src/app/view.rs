// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::application::GalleryController;
use crate::i18n::fluent::I18n;
use crate::ui::page;
use crate::ui::theming::ColorScheme;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a GalleryController,
    pub colors: ColorScheme,
    pub show_page_indicator: bool,
}

/// Renders the page for the controller's current entry.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    page::view(page::ViewContext {
        i18n: ctx.i18n,
        entry: ctx.controller.current_entry(),
        colors: ctx.colors,
        page_indicator: page_indicator(ctx.controller, ctx.show_page_indicator),
    })
    .map(Message::Page)
}

/// `(page, total)` for the caption, or `None` when the indicator is hidden.
pub(crate) fn page_indicator(
    controller: &GalleryController,
    enabled: bool,
) -> Option<(usize, usize)> {
    let position = controller.position();
    enabled.then_some((position.page, position.total))
}
