// SPDX-License-Identifier: MPL-2.0
//! User interface layer.
//!
//! - [`page`]: the gallery page and its messages
//! - [`artwork`]: embedded artwork lookup for image handles
//! - [`styles`], [`theming`], [`design_tokens`]: look and feel

pub mod artwork;
pub mod design_tokens;
pub mod page;
pub mod styles;
pub mod theming;
