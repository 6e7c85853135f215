// SPDX-License-Identifier: MPL-2.0
//! Application layer - state that sits between the domain content and the UI.
//!
//! - [`navigation`]: [`GalleryController`], the wrap-around page cursor over a
//!   [`Gallery`](crate::domain::Gallery)
//!
//! The presentation layer owns a controller, forwards button and keyboard
//! input to it, and re-reads [`GalleryController::current_entry`] when it
//! renders.

pub mod navigation;

pub use navigation::{GalleryController, PagePosition};
