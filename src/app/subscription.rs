// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Arrow keys drive the gallery the same way the buttons do. Key presses
//! already captured by a widget are left alone.

use super::Message;
use crate::ui::page;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| map_status_event(&event, status))
}

/// Only events no widget has handled reach the gallery.
pub(crate) fn map_status_event(event: &Event, status: event::Status) -> Option<Message> {
    match status {
        event::Status::Ignored => map_event(event),
        event::Status::Captured => None,
    }
}

/// Translates a native event into a gallery message, if it is one.
pub(crate) fn map_event(event: &Event) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::ArrowRight),
            ..
        }) => Some(Message::Page(page::Message::Next)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::ArrowLeft),
            ..
        }) => Some(Message::Page(page::Message::Previous)),
        _ => None,
    }
}
