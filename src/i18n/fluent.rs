// SPDX-License-Identifier: MPL-2.0
//! Fluent catalogs embedded in the binary.
//!
//! One `assets/i18n/<code>.ftl` file per [`Locale`]. Translation keys are
//! written `section.name` in code; Fluent identifiers cannot contain dots, so
//! the catalogs spell the same key `section-name`. Keys never contain `-`, so
//! a Fluent identifier is not itself a key.

use crate::domain::locale::Locale;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Converts a translation key to the Fluent message identifier, or `None`
/// if `key` is not in key form.
#[must_use]
pub fn message_id(key: &str) -> Option<Cow<'_, str>> {
    if key.contains('-') {
        None
    } else if key.contains('.') {
        Some(Cow::Owned(key.replace('.', "-")))
    } else {
        Some(Cow::Borrowed(key))
    }
}

/// Translation key of a Fluent message identifier.
fn key_of(id: &str) -> String {
    id.replace('-', ".")
}

/// Language identifier of a supported locale.
#[must_use]
pub fn language_identifier(locale: Locale) -> LanguageIdentifier {
    // The codes are fixed ASCII language subtags.
    locale
        .code()
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

/// Message identifiers defined at the top level of a Fluent source.
///
/// Messages start in column 0 with an identifier; comments (`#`), terms (`-`)
/// and continuation lines are skipped.
fn declared_ids(source: &str) -> impl Iterator<Item = &str> {
    source.lines().filter_map(|line| {
        if !line.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        let (id, _) = line.split_once('=')?;
        Some(id.trim_end())
    })
}

/// Parsed catalog of one locale.
struct LocaleCatalog {
    bundle: FluentBundle<FluentResource>,
    /// Translation keys, in `section.name` form.
    keys: BTreeSet<String>,
}

/// Parsed catalogs of every supported locale.
pub struct Catalog {
    locales: HashMap<Locale, LocaleCatalog>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sizes: Vec<(Locale, usize)> = self
            .locales
            .iter()
            .map(|(locale, catalog)| (*locale, catalog.keys.len()))
            .collect();
        sizes.sort();
        f.debug_struct("Catalog").field("messages", &sizes).finish()
    }
}

impl Catalog {
    /// Loads the catalogs compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::I18n`] if a locale has no catalog or a catalog fails
    /// to parse.
    pub fn embedded() -> Result<Self> {
        let mut sources = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let filename = format!("{}.ftl", locale.code());
            let file = Asset::get(&filename)
                .ok_or_else(|| Error::I18n(format!("missing catalog {filename}")))?;
            sources.push((locale, String::from_utf8_lossy(file.data.as_ref()).into_owned()));
        }
        Self::from_sources(sources)
    }

    /// Builds catalogs from Fluent sources.
    ///
    /// # Errors
    ///
    /// Returns [`Error::I18n`] on the first source that fails to parse or
    /// redefines a message.
    pub fn from_sources<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Locale, String)>,
    {
        let mut locales = HashMap::new();

        for (locale, source) in sources {
            let ids: BTreeSet<String> = declared_ids(&source).map(str::to_string).collect();

            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                Error::I18n(format!("{locale}.ftl: {errors:?}"))
            })?;

            let mut bundle = FluentBundle::new(vec![language_identifier(locale)]);
            // Labels are rendered by Iced, which has no use for bidi isolation marks.
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| Error::I18n(format!("{locale}.ftl: {errors:?}")))?;

            let keys = ids
                .iter()
                .filter(|id| bundle.has_message(id))
                .map(|id| key_of(id))
                .collect();
            tracing::debug!(%locale, "loaded translation catalog");
            locales.insert(locale, LocaleCatalog { bundle, keys });
        }

        Ok(Self { locales })
    }

    /// Formats `key` in `locale`, or `None` if the catalog has no such
    /// message.
    #[must_use]
    pub fn message(&self, locale: Locale, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let bundle = &self.locales.get(&locale)?.bundle;
        let message = bundle.get_message(&message_id(key)?)?;
        let pattern = message.value()?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(%locale, key, ?errors, "translation formatted with errors");
        }
        Some(value.into_owned())
    }

    /// Translation keys defined for `locale`, in the form passed to
    /// [`message`](Self::message).
    #[must_use]
    pub fn keys(&self, locale: Locale) -> BTreeSet<String> {
        self.locales
            .get(&locale)
            .map(|catalog| catalog.keys.clone())
            .unwrap_or_default()
    }

    /// Keys present in `reference` but not in `other`.
    #[must_use]
    pub fn missing_keys(&self, reference: Locale, other: Locale) -> BTreeSet<String> {
        let other_keys = self.keys(other);
        self.keys(reference)
            .into_iter()
            .filter(|id| !other_keys.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_id_replaces_dots() {
        assert_eq!(message_id("nav.home").as_deref(), Some("nav-home"));
        assert_eq!(message_id("dash.template_po").as_deref(), Some("dash-template_po"));
        assert!(matches!(message_id("title"), Some(Cow::Borrowed(_))));
    }

    #[test]
    fn message_id_rejects_fluent_identifiers() {
        assert_eq!(message_id("nav-home"), None);
        assert_eq!(message_id("nav.sign-in"), None);
    }

    #[test]
    fn fluent_identifier_is_not_a_key() {
        let catalog = Catalog::from_sources([(Locale::En, "nav-home = Home\n".to_string())]).unwrap();
        assert_eq!(catalog.message(Locale::En, "nav.home", None), Some("Home".to_string()));
        assert_eq!(catalog.message(Locale::En, "nav-home", None), None);
    }

    #[test]
    fn keys_are_listed_in_dotted_form() {
        let catalog = Catalog::from_sources([(
            Locale::En,
            "nav-home = Home\ntitle = Title\n".to_string(),
        )])
        .unwrap();
        assert_eq!(
            catalog.keys(Locale::En),
            BTreeSet::from(["nav.home".to_string(), "title".to_string()])
        );
    }

    #[test]
    fn declared_ids_skip_comments_terms_and_continuations() {
        let source = "# comment\n## group\n-brand = Doc\nhello = Hi\n    continued\nbye=Bye\n";
        let ids: Vec<&str> = declared_ids(source).collect();
        assert_eq!(ids, vec!["hello", "bye"]);
    }

    #[test]
    fn from_sources_rejects_invalid_fluent() {
        let result = Catalog::from_sources([(Locale::En, "= broken".to_string())]);
        assert!(matches!(result, Err(Error::I18n(_))));
    }

    #[test]
    fn message_formats_arguments() {
        let catalog = Catalog::from_sources([(
            Locale::En,
            "common-usage_count = { $usage } / { $limit }\n".to_string(),
        )])
        .unwrap();

        let mut args = FluentArgs::new();
        args.set("usage", 45);
        args.set("limit", 100);
        assert_eq!(
            catalog.message(Locale::En, "common.usage_count", Some(&args)),
            Some("45 / 100".to_string())
        );
    }

    #[test]
    fn message_is_none_for_unknown_key_or_locale() {
        let catalog = Catalog::from_sources([(Locale::En, "a = A\n".to_string())]).unwrap();
        assert_eq!(catalog.message(Locale::En, "b", None), None);
        assert_eq!(catalog.message(Locale::Th, "a", None), None);
    }

    #[test]
    fn missing_keys_reports_asymmetric_differences() {
        let catalog = Catalog::from_sources([
            (Locale::En, "a = A\nb = B\n".to_string()),
            (Locale::Th, "a = ก\n".to_string()),
        ])
        .unwrap();

        assert_eq!(
            catalog.missing_keys(Locale::En, Locale::Th),
            BTreeSet::from(["b".to_string()])
        );
        assert!(catalog.missing_keys(Locale::Th, Locale::En).is_empty());
    }

    #[test]
    fn embedded_catalogs_load_for_every_locale() {
        let catalog = Catalog::embedded().expect("embedded catalogs should parse");
        for locale in Locale::ALL {
            assert!(!catalog.keys(locale).is_empty(), "{locale} catalog is empty");
        }
    }
}
