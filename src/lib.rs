// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a small artwork gallery built with the Iced GUI framework.
//!
//! It shows a fixed set of paintings one at a time, with their title and
//! artist, and steps through them with Next / Previous, wrapping around at
//! both ends. Texts are localized with Fluent; artworks are embedded SVGs.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
