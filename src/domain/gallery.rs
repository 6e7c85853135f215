// SPDX-License-Identifier: MPL-2.0
//! The fixed, ordered sequence of artworks shown by the application.

use super::artwork::{ArtworkEntry, ImageHandle, TextHandle};
use crate::error::{Error, Result};
use std::ops::Index;
use std::sync::Arc;

/// Built-in artwork set, in display order.
const ART_SPACE_ENTRIES: [ArtworkEntry; 5] = [
    ArtworkEntry::new(
        ImageHandle::new("rose"),
        TextHandle::new("rose-title"),
        TextHandle::new("rose-author"),
    ),
    ArtworkEntry::new(
        ImageHandle::new("stack_of_rocks"),
        TextHandle::new("stack-of-rocks-title"),
        TextHandle::new("stack-of-rocks-author"),
    ),
    ArtworkEntry::new(
        ImageHandle::new("valley_tree"),
        TextHandle::new("valley-tree-title"),
        TextHandle::new("valley-tree-author"),
    ),
    ArtworkEntry::new(
        ImageHandle::new("lake_and_boats"),
        TextHandle::new("lake-and-boats-title"),
        TextHandle::new("lake-and-boats-author"),
    ),
    ArtworkEntry::new(
        ImageHandle::new("lake_and_valley"),
        TextHandle::new("lake-and-valley-title"),
        TextHandle::new("lake-and-valley-author"),
    ),
];

/// Read-only, non-empty list of artworks.
///
/// Cloning is cheap; all clones share the same entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    entries: Arc<[ArtworkEntry]>,
}

impl Gallery {
    /// Builds a gallery from an ordered list of entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGallery`] if `entries` is empty.
    pub fn new(entries: Vec<ArtworkEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// The five paintings the application ships with.
    #[must_use]
    pub fn art_space() -> Self {
        Self {
            entries: Arc::from(ART_SPACE_ENTRIES.as_slice()),
        }
    }

    /// Number of entries; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ArtworkEntry> {
        self.entries.get(index)
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ArtworkEntry> {
        self.entries.iter()
    }
}

impl Index<usize> for Gallery {
    type Output = ArtworkEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::art_space()
    }
}
