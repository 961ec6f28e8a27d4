// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! [`TranslationStore`] owns the active [`Locale`] and resolves translation
//! keys against the Fluent catalogs in [`fluent`].
//!
//! # Features
//!
//! - Startup locale resolution from CLI, config, or system settings
//! - Runtime language switching with synchronous change notification
//! - A key missing from the active catalog renders as the key itself
//!
//! # Example
//!
//! ```
//! use doc_extract::domain::locale::Locale;
//! use doc_extract::i18n::TranslationStore;
//!
//! let mut i18n = TranslationStore::new(Locale::En).unwrap();
//! assert_eq!(i18n.translate("nav.home"), "Home");
//!
//! i18n.set_language(Locale::Th);
//! assert_eq!(i18n.translate("nav.home"), "หน้าแรก");
//! assert_eq!(i18n.translate("no.such_key"), "no.such_key");
//! ```

pub mod fluent;

pub use fluent_bundle::FluentArgs;

use crate::config::Config;
use crate::domain::locale::Locale;
use crate::error::Result;
use crate::store::{Listeners, Unsubscribe};
use fluent::Catalog;
use std::fmt;

/// Active language plus the catalogs to translate with.
pub struct TranslationStore {
    catalog: Catalog,
    language: Locale,
    listeners: Listeners<Locale>,
}

impl fmt::Debug for TranslationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationStore")
            .field("language", &self.language)
            .field("catalog", &self.catalog)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl TranslationStore {
    /// Creates a store over the embedded catalogs.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded catalog is missing or malformed.
    pub fn new(language: Locale) -> Result<Self> {
        Ok(Self::with_catalog(Catalog::embedded()?, language))
    }

    #[must_use]
    pub fn with_catalog(catalog: Catalog, language: Locale) -> Self {
        Self {
            catalog,
            language,
            listeners: Listeners::new(),
        }
    }

    #[must_use]
    pub fn language(&self) -> Locale {
        self.language
    }

    /// Switches the active language and notifies subscribers before
    /// returning, even if `locale` is already active.
    pub fn set_language(&mut self, locale: Locale) {
        if locale != self.language {
            tracing::info!(from = %self.language, to = %locale, "language changed");
        }
        self.language = locale;
        self.listeners.notify(&locale);
    }

    /// Looks `key` up in the active catalog. Returns `key` unchanged when the
    /// active catalog has no such message.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Like [`translate`](Self::translate), with Fluent arguments.
    #[must_use]
    pub fn translate_with(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.lookup(key, Some(args))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        match self.catalog.message(self.language, key, args) {
            Some(value) => value,
            None => {
                tracing::trace!(locale = %self.language, key, "translation missing");
                key.to_string()
            }
        }
    }

    /// Registers a callback run with the new locale after every
    /// [`set_language`](Self::set_language).
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: FnMut(&Locale) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Picks the startup locale: CLI flag, then config file, then the OS locale.
///
/// Values naming an unsupported language are skipped. Returns `None` when no
/// source yields a supported locale.
pub fn resolve_locale(
    cli_lang: Option<&str>,
    config: &Config,
    os_locale: Option<&str>,
) -> Option<Locale> {
    let candidates = [
        ("cli", cli_lang),
        ("config", config.general.language.as_deref()),
        ("os", os_locale),
    ];

    candidates.into_iter().find_map(|(source, value)| {
        let value = value?;
        match value.parse::<Locale>() {
            Ok(locale) => Some(locale),
            Err(err) => {
                tracing::debug!(source, %err, "skipping locale candidate");
                None
            }
        }
    })
}
