// SPDX-License-Identifier: MPL-2.0
//! Resolution of artwork image handles into drawable SVGs.
//!
//! Artworks are embedded from `assets/artworks/<handle>.svg`, so the binary
//! has no files to locate at runtime.

use crate::domain::ImageHandle;
use iced::widget::svg;
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct Asset;

/// Drawn in place of an artwork whose asset is missing.
const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400"><rect width="400" height="400" fill="#d9d9d9"/><path d="M60 320 L160 200 L230 280 L280 230 L340 320 Z" fill="#a6a6a6"/><circle cx="290" cy="120" r="36" fill="#bfbfbf"/></svg>"##;

/// Raw SVG source for an artwork, if it is embedded.
#[must_use]
pub fn svg_source(handle: ImageHandle) -> Option<Cow<'static, [u8]>> {
    Asset::get(&format!("{}.svg", handle.key())).map(|file| file.data)
}

/// Drawable handle for an artwork; falls back to a neutral placeholder.
#[must_use]
pub fn resolve(handle: ImageHandle) -> svg::Handle {
    match svg_source(handle) {
        Some(data) => svg::Handle::from_memory(data),
        None => {
            tracing::warn!(%handle, "artwork asset missing, drawing placeholder");
            svg::Handle::from_memory(PLACEHOLDER_SVG.as_bytes())
        }
    }
}
