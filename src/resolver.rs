//! Lenient lookups for rendering.
//!
//! [`TranslationTable::lookup`] reports every miss as an error. Page text
//! cannot show an error, so the translator recovers instead: an
//! unsupported locale becomes the default locale and a missing key is
//! rendered as the key itself.

use std::borrow::Cow;

use crate::config::{
    I18nSettings,
    MissingKeyDisplay,
};
use crate::table::TranslationTable;
use crate::types::Locale;

/// Table lookups with the fallback policy from [`I18nSettings`].
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a TranslationTable,
    default_locale: Locale,
    missing_key: MissingKeyDisplay,
}

impl<'a> Translator<'a> {
    #[must_use]
    pub const fn new(table: &'a TranslationTable, settings: &I18nSettings) -> Self {
        Self { table, default_locale: settings.default_locale, missing_key: settings.missing_key }
    }

    #[must_use]
    pub const fn table(&self) -> &'a TranslationTable {
        self.table
    }

    /// Parses `tag`, falling back to the default locale.
    #[must_use]
    pub fn resolve_locale(&self, tag: &str) -> Locale {
        Locale::parse_tag(tag).unwrap_or_else(|error| {
            tracing::debug!(%error, fallback = %self.default_locale, "Falling back to default locale");
            self.default_locale
        })
    }

    /// Text for `key` in the locale named by `tag`; never fails.
    #[must_use]
    pub fn translate(&self, key: &str, tag: &str) -> Cow<'a, str> {
        let locale = self.resolve_locale(tag);
        self.translate_in(key, locale)
    }

    /// Text for `key` in `locale`; a missing key is rendered per settings.
    #[must_use]
    pub fn translate_in(&self, key: &str, locale: Locale) -> Cow<'a, str> {
        match self.table.lookup(key, locale) {
            Ok(text) => Cow::Borrowed(text),
            Err(error) => {
                tracing::debug!(%error, "Rendering missing translation key");
                match self.missing_key {
                    MissingKeyDisplay::Key => Cow::Owned(key.to_string()),
                    MissingKeyDisplay::Bracketed => Cow::Owned(format!("[{key}]")),
                }
            }
        }
    }

    /// `(key, text)` pairs for a group of keys such as `footer_`, in table order.
    #[must_use]
    pub fn translate_group(&self, prefix: &str, tag: &str) -> Vec<(&'a str, &'a str)> {
        let locale = self.resolve_locale(tag);
        self.table
            .keys_with_prefix(prefix)
            .map(|entry| (entry.key.as_str(), entry.value(locale)))
            .collect()
    }
}
