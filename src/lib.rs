// SPDX-License-Identifier: MPL-2.0
//! `doc_extract` is the bilingual desktop shell of the DocExtract document
//! data extraction service, built with the Iced GUI framework.
//!
//! The shell is driven by three small pieces of state: a translation store
//! ([`i18n::TranslationStore`]), a session store ([`session::SessionStore`])
//! and a route guard ([`routing::guard`]). Both stores notify subscribers
//! synchronously through [`store::Listeners`].

#![doc(html_root_url = "https://docs.rs/doc_extract/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod routing;
pub mod session;
pub mod store;
pub mod ui;
