use serde::{
    Deserialize,
    Serialize,
};

use crate::types::Locale;

/// One row of the table: a key and its English and French text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct TranslationEntry {
    pub key: String,
    pub en: String,
    pub fr: String,
}

impl TranslationEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self { key: key.into(), en: en.into(), fr: fr.into() }
    }

    /// Text stored for `locale`, exactly as written.
    #[must_use]
    pub fn value(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Fr => &self.fr,
        }
    }
}
