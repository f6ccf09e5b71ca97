use thiserror::Error;

use crate::types::Locale;

/// Errors returned by table lookups.
///
/// Both are recoverable; see [`crate::resolver::Translator`] for the
/// fallback policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The key is not present in the table.
    #[error("Translation key '{key}' not found")]
    KeyNotFound { key: String },

    /// The locale is neither `en` nor `fr`.
    #[error("Unsupported locale '{locale}' (expected one of: en, fr)")]
    UnsupportedLocale { locale: String },
}

/// A single integrity problem found while validating entries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryIssue {
    #[error("entry #{index} has an empty key")]
    EmptyKey { index: usize },

    #[error("key '{key}' is defined twice (entries #{first} and #{second})")]
    DuplicateKey { key: String, first: usize, second: usize },

    #[error("key '{key}' has an empty '{locale}' value")]
    EmptyValue { key: String, locale: Locale },
}

/// Errors raised while building or reading a translation table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Translation table is invalid:\n{}", format_issues(.0))]
    Invalid(Vec<EntryIssue>),

    /// A key is present in one locale file but not the other.
    #[error("Key '{key}' has no '{locale}' translation")]
    MissingTranslation { key: String, locale: Locale },

    #[error("Locale file for '{locale}' must contain a JSON object")]
    NotAnObject { locale: Locale },

    #[error("Invalid record on line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse translation table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read translation table: {0}")]
    Io(#[from] std::io::Error),
}

/// Numbered, one-per-line listing of `issues`.
fn format_issues(issues: &[EntryIssue]) -> String {
    issues
        .iter()
        .enumerate()
        .map(|(i, issue)| format!("  {}. {issue}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
