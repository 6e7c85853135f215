// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the gallery content and its value objects.
//!
//! Nothing in here knows about Iced or Fluent: artwork images and texts are
//! carried as opaque handles and resolved by the UI layer.
//!
//! # Modules
//!
//! - [`artwork`]: [`ArtworkEntry`](artwork::ArtworkEntry) and its
//!   [`ImageHandle`](artwork::ImageHandle) / [`TextHandle`](artwork::TextHandle)
//! - [`gallery`]: the fixed, ordered [`Gallery`](gallery::Gallery)

pub mod artwork;
pub mod gallery;

pub use artwork::{ArtworkEntry, ImageHandle, TextHandle};
pub use gallery::Gallery;
