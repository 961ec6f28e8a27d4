// SPDX-License-Identifier: MPL-2.0
//! Widgets and pages of the DocExtract shell.
//!
//! Pages are plain functions from borrowed store state to an
//! [`iced::Element`]; they emit top-level [`crate::app::Message`]s and keep
//! no state of their own.

pub mod design_tokens;
pub mod document_preview;
pub mod language_switcher;
pub mod layout;
pub mod pages;
pub mod styles;

use design_tokens::palette;
use iced::widget::{text, Text};

/// Secondary text in the muted gray.
pub(crate) fn muted<'a>(content: String, size: f32) -> Text<'a> {
    text(content).size(size).color(palette::GRAY_400)
}
