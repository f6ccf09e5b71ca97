use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::format::Format;
use crate::types::Locale;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "export.format")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered, one-per-line listing of `errors`.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Locale used when the requested one is unsupported.
    pub default_locale: Locale,

    /// How a missing key is rendered by the translator.
    pub missing_key: MissingKeyDisplay,

    /// Joins nested keys when reading per-locale JSON objects.
    pub key_separator: String,

    pub export: ExportConfig,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            missing_key: MissingKeyDisplay::default(),
            key_separator: ".".to_string(),
            export: ExportConfig::default(),
        }
    }
}

/// Rendering of a key that is not in the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingKeyDisplay {
    /// The key itself: `nav_blog`
    #[default]
    Key,
    /// The key in brackets, easy to spot on a page: `[nav_blog]`
    Bracketed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { format: ExportFormat::default(), pretty: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportFormat {
    #[default]
    Json,
    JsonLines,
    /// Flat key → text object; the locale is chosen at export time.
    Locale,
}

impl ExportFormat {
    /// Concrete [`Format`] for this export, using `locale` for per-locale output.
    #[must_use]
    pub const fn with_locale(self, locale: Locale) -> Format {
        match self {
            Self::Json => Format::Json,
            Self::JsonLines => Format::JsonLines,
            Self::Locale => Format::Locale(locale),
        }
    }
}

impl I18nSettings {
    /// # Errors
    /// - Empty or whitespace key separator
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        } else if self.key_separator.chars().any(char::is_whitespace) {
            errors.push(ValidationError::new(
                "keySeparator",
                format!("The separator '{}' cannot contain whitespace", self.key_separator),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
