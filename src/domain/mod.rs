// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types with ZERO external dependencies.
//!
//! This module contains pure value types shared by the stores, the router and
//! the views. It depends on `std` only so every rule here can be tested
//! without a UI or a catalog loaded.
//!
//! # Modules
//!
//! - [`locale`]: Supported languages ([`Locale`](locale::Locale))
//! - [`session`]: Authentication state ([`Session`](session::Session),
//!   [`Profile`](session::Profile))
//! - [`document`]: Picked/dropped document metadata
//!   ([`DocumentInfo`](document::DocumentInfo), [`FileCategory`](document::FileCategory))
//!   and extraction templates ([`DocumentType`](document::DocumentType))
//! - [`history`]: Processed document records ([`HistoryEntry`](history::HistoryEntry))

pub mod document;
pub mod history;
pub mod locale;
pub mod session;
