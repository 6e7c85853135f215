// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Artwork titles, artist names and control labels are Fluent messages; the
//! gallery only carries their ids as [`TextHandle`](crate::domain::TextHandle)s.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Translation files embedded at build time
//! - Fallback to `en-US` when no supported locale is found

pub mod fluent;
