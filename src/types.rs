//! Core types used throughout the project.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::table::LookupError;

/// A supported display language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// French
    Fr,
}

impl Locale {
    /// All supported locales, English first.
    pub const ALL: [Self; 2] = [Self::En, Self::Fr];

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Parses a locale tag such as `fr`, `FR`, `fr-CA` or `en_US.UTF-8`.
    ///
    /// Only the primary language subtag decides the locale; region,
    /// encoding and modifier parts are ignored.
    ///
    /// # Errors
    /// Returns [`LookupError::UnsupportedLocale`] when the primary subtag is
    /// neither `en` nor `fr`.
    pub fn parse_tag(tag: &str) -> Result<Self, LookupError> {
        let mut normalized = tag.trim().replace('_', "-").to_ascii_lowercase();

        if let Some(idx) = normalized.find('@') {
            normalized.truncate(idx);
        }
        if let Some(idx) = normalized.find('.') {
            normalized.truncate(idx);
        }

        let primary = normalized.split('-').next().unwrap_or_default();
        match primary {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            _ => Err(LookupError::UnsupportedLocale { locale: tag.to_string() }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_tag(s)
    }
}
