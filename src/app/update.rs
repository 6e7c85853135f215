// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Each message is applied synchronously and in dispatch order; the view is
//! rebuilt by Iced right after, which is what refreshes the page.

use super::Message;
use crate::application::GalleryController;
use crate::ui::page;
use iced::Task;

/// Mutable application state touched by `update`.
pub struct UpdateContext<'a> {
    pub controller: &'a mut GalleryController,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Page(page_message) => handle_page_message(ctx, page_message),
    }
}

fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match message {
        page::Message::Next => ctx.controller.next(),
        page::Message::Previous => ctx.controller.previous(),
    }
    Task::none()
}
