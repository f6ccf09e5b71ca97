//! 翻訳テーブル本体
//!
//! 挿入順を保持したエントリ列と、キー → 位置のインデックスを持つ。
//! 構築後は不変。

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::{
    EntryIssue,
    LookupError,
    TableError,
    TranslationEntry,
};
use crate::types::Locale;

/// Immutable, ordered key → {en, fr} table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// 挿入順のエントリ
    entries: Vec<TranslationEntry>,

    /// キー → `entries` のインデックス
    index: HashMap<String, usize>,
}

impl TranslationTable {
    /// Validates `entries` and builds the table.
    ///
    /// # Errors
    /// Returns [`TableError::Invalid`] with every issue found when a key is
    /// empty or duplicated, or when either text is empty.
    pub fn new(entries: Vec<TranslationEntry>) -> Result<Self, TableError> {
        Self::validate(&entries).map_err(TableError::Invalid)?;

        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.key.clone(), position))
            .collect();

        tracing::debug!(entries = entries.len(), "Translation table built");
        Ok(Self { entries, index })
    }

    /// Checks the table invariants without building anything.
    ///
    /// Every problem is reported, not just the first one.
    ///
    /// # Errors
    /// Returns the list of issues when at least one entry is malformed.
    pub fn validate(entries: &[TranslationEntry]) -> Result<(), Vec<EntryIssue>> {
        let mut issues = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if entry.key.is_empty() {
                issues.push(EntryIssue::EmptyKey { index });
            } else {
                match seen.entry(entry.key.as_str()) {
                    Entry::Occupied(first) => issues.push(EntryIssue::DuplicateKey {
                        key: entry.key.clone(),
                        first: *first.get(),
                        second: index,
                    }),
                    Entry::Vacant(slot) => {
                        slot.insert(index);
                    }
                }
            }

            for locale in Locale::ALL {
                if entry.value(locale).is_empty() {
                    issues.push(EntryIssue::EmptyValue { key: entry.key.clone(), locale });
                }
            }
        }

        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }

    /// Returns the text for `key` in `locale`.
    ///
    /// # Errors
    /// Returns [`LookupError::KeyNotFound`] when `key` is not in the table.
    pub fn lookup(&self, key: &str, locale: Locale) -> Result<&str, LookupError> {
        self.get(key)
            .map(|entry| entry.value(locale))
            .ok_or_else(|| LookupError::KeyNotFound { key: key.to_string() })
    }

    /// Same as [`Self::lookup`] with the locale given as a tag (`"en"`, `"fr-CA"`).
    ///
    /// The locale is checked before the key.
    ///
    /// # Errors
    /// Returns [`LookupError::UnsupportedLocale`] or [`LookupError::KeyNotFound`].
    pub fn lookup_tag(&self, key: &str, locale: &str) -> Result<&str, LookupError> {
        let locale = Locale::parse_tag(locale)?;
        self.lookup(key, locale)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.index.get(key).and_then(|&position| self.entries.get(position))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All keys in table order.
    ///
    /// The iterator borrows the table, so calling this again yields the same
    /// sequence.
    pub fn all_keys(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// `(key, text)` pairs for one locale, in table order.
    pub fn locale_values(
        &self,
        locale: Locale,
    ) -> impl ExactSizeIterator<Item = (&str, &str)> + Clone + '_ {
        self.entries.iter().map(move |entry| (entry.key.as_str(), entry.value(locale)))
    }

    /// Entries whose key starts with `prefix`, in table order.
    ///
    /// Used for blocks rendered as lists, e.g. `footer_` links.
    ///
    /// The entries borrow the table only; `prefix` just has to outlive the
    /// iterator.
    pub fn keys_with_prefix<'s>(
        &'s self,
        prefix: &str,
    ) -> impl Iterator<Item = &'s TranslationEntry> + Clone {
        self.entries.iter().filter(move |entry| entry.key.starts_with(prefix))
    }

    #[must_use]
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranslationEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TranslationTable {
    type Item = &'a TranslationEntry;
    type IntoIter = std::slice::Iter<'a, TranslationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl TryFrom<Vec<TranslationEntry>> for TranslationTable {
    type Error = TableError;

    fn try_from(entries: Vec<TranslationEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}
