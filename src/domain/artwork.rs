// SPDX-License-Identifier: MPL-2.0
//! Artwork entries and the opaque handles they carry.

use std::fmt;

/// Opaque reference to an artwork image.
///
/// The handle is the asset stem (e.g. `"rose"`); the UI layer turns it into
/// something drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(&'static str);

impl ImageHandle {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Opaque reference to a piece of user-facing text (a localization message id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextHandle(&'static str);

impl TextHandle {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One gallery item: what to show and how to caption it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkEntry {
    pub image: ImageHandle,
    pub title: TextHandle,
    pub artist: TextHandle,
}

impl ArtworkEntry {
    #[must_use]
    pub const fn new(image: ImageHandle, title: TextHandle, artist: TextHandle) -> Self {
        Self {
            image,
            title,
            artist,
        }
    }
}
