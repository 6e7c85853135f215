// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and startup.

// ==========================================================================
// Localization
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Display
// ==========================================================================

/// Whether the "n / N" page indicator is shown under the caption.
pub const DEFAULT_SHOW_PAGE_INDICATOR: bool = true;

// ==========================================================================
// Logging
// ==========================================================================

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "art_space=info";
