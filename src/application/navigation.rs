// SPDX-License-Identifier: MPL-2.0
//! Wrap-around navigation over the gallery.
//!
//! The controller is a closed cyclic state machine: its states are the
//! indices `0..N`, `next` moves to `(i + 1) mod N` and `previous` moves to
//! `(i + N - 1) mod N`. Every state is valid and both transitions are total,
//! so nothing here can fail once a non-empty [`Gallery`] exists.

use crate::domain::{ArtworkEntry, Gallery};

/// Where the controller currently stands, for display ("2 / 5").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePosition {
    /// 1-based page number.
    pub page: usize,
    /// Number of pages in the gallery.
    pub total: usize,
}

/// Owns the current page index of a [`Gallery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryController {
    gallery: Gallery,
    current_index: usize,
}

impl GalleryController {
    /// Starts on the first artwork.
    #[must_use]
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            current_index: 0,
        }
    }

    /// The artwork to display.
    #[must_use]
    pub fn current_entry(&self) -> &ArtworkEntry {
        // current_index < gallery.len() and the gallery is never empty.
        &self.gallery[self.current_index]
    }

    /// Advances one page, going back to the first artwork after the last one.
    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.gallery.len();
        tracing::debug!(index = self.current_index, "gallery: next");
    }

    /// Steps back one page, going to the last artwork before the first one.
    pub fn previous(&mut self) {
        let len = self.gallery.len();
        self.current_index = (self.current_index + len - 1) % len;
        tracing::debug!(index = self.current_index, "gallery: previous");
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gallery.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gallery.is_empty()
    }

    #[must_use]
    pub fn position(&self) -> PagePosition {
        PagePosition {
            page: self.current_index + 1,
            total: self.gallery.len(),
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }
}

impl Default for GalleryController {
    fn default() -> Self {
        Self::new(Gallery::art_space())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ImageHandle, TextHandle};

    fn gallery_of(len: usize) -> Gallery {
        const KEYS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let entries = KEYS[..len]
            .iter()
            .map(|&key| {
                ArtworkEntry::new(ImageHandle::new(key), TextHandle::new(key), TextHandle::new(key))
            })
            .collect();
        Gallery::new(entries).expect("non-empty gallery")
    }

    fn controller_at(len: usize, index: usize) -> GalleryController {
        let mut controller = GalleryController::new(gallery_of(len));
        for _ in 0..index {
            controller.next();
        }
        assert_eq!(controller.current_index(), index);
        controller
    }

    #[test]
    fn starts_on_first_entry() {
        let controller = GalleryController::default();
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.current_entry().image.key(), "rose");
    }

    #[test]
    fn next_then_previous_returns_to_start() {
        for len in 1..=8 {
            for start in 0..len {
                let mut controller = controller_at(len, start);
                controller.next();
                controller.previous();
                assert_eq!(controller.current_index(), start, "len={len}");

                controller.previous();
                controller.next();
                assert_eq!(controller.current_index(), start, "len={len}");
            }
        }
    }

    #[test]
    fn full_cycle_in_either_direction_is_identity() {
        for len in 1..=8 {
            for start in 0..len {
                let mut controller = controller_at(len, start);
                for _ in 0..len {
                    controller.next();
                }
                assert_eq!(controller.current_index(), start);
                for _ in 0..len {
                    controller.previous();
                }
                assert_eq!(controller.current_index(), start);
            }
        }
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut controller = controller_at(5, 4);
        controller.next();
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut controller = GalleryController::new(gallery_of(5));
        controller.previous();
        assert_eq!(controller.current_index(), 4);
    }

    #[test]
    fn single_entry_gallery_stays_put() {
        let mut controller = GalleryController::new(gallery_of(1));
        controller.next();
        assert_eq!(controller.current_index(), 0);
        controller.previous();
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn current_entry_always_belongs_to_gallery() {
        let mut controller = GalleryController::default();
        for _ in 0..12 {
            let entry = *controller.current_entry();
            assert!(controller.gallery().iter().any(|candidate| *candidate == entry));
            controller.next();
        }
    }

    #[test]
    fn reference_walkthrough() {
        let mut controller = GalleryController::default();
        let image = |c: &GalleryController| c.current_entry().image.key();

        assert_eq!(image(&controller), "rose");
        controller.next();
        assert_eq!(image(&controller), "stack_of_rocks");
        controller.next();
        assert_eq!(image(&controller), "valley_tree");
        controller.previous();
        assert_eq!(image(&controller), "stack_of_rocks");
        controller.previous();
        assert_eq!(image(&controller), "rose");
        controller.previous();
        assert_eq!(image(&controller), "lake_and_valley");
        assert_eq!(controller.current_index(), 4);
    }

    #[test]
    fn position_is_one_based() {
        let mut controller = GalleryController::default();
        assert_eq!(controller.position(), PagePosition { page: 1, total: 5 });
        controller.previous();
        assert_eq!(controller.position(), PagePosition { page: 5, total: 5 });
        assert_eq!(controller.len(), 5);
        assert!(!controller.is_empty());
    }
}
