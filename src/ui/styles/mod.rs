// SPDX-License-Identifier: MPL-2.0
//! Style functions for the gallery page widgets.

pub mod button;
pub mod container;
