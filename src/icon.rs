// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the rose artwork at runtime to produce a RGBA icon for the
//! window title bar. Falls back to `None` if rendering fails.

use crate::domain::ImageHandle;
use crate::ui::artwork;
use iced::window::{icon, Icon};
use resvg::usvg;

/// Icon edge length in pixels.
const ICON_SIZE: u32 = 128;

/// Artwork used as the application icon.
const ICON_ARTWORK: ImageHandle = ImageHandle::new("rose");

/// Rasterize the icon artwork to a 128x128 RGBA buffer.
pub fn load_window_icon() -> Option<Icon> {
    let pixels = render_icon_rgba()?;
    icon::from_rgba(pixels, ICON_SIZE, ICON_SIZE).ok()
}

fn render_icon_rgba() -> Option<Vec<u8>> {
    let source = artwork::svg_source(ICON_ARTWORK)?;
    let tree = usvg::Tree::from_data(&source, &usvg::Options::default()).ok()?;

    let orig_size = tree.size();
    let scale_x = ICON_SIZE as f32 / orig_size.width();
    let scale_y = ICON_SIZE as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.data().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_full_rgba_buffer() {
        let pixels = render_icon_rgba().expect("icon should render");
        assert_eq!(pixels.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        let center = ((ICON_SIZE / 2) * ICON_SIZE + ICON_SIZE / 2) as usize * 4;
        assert_eq!(pixels[center + 3], 255);
    }
}
