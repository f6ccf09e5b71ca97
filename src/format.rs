//! External representations of a translation table.
//!
//! - JSON array of `{ "key", "en", "fr" }` records
//! - JSON Lines, one record per line
//! - One flat `{ key: text }` object per locale (`locales/en.json` style)

use std::collections::{
    HashMap,
    HashSet,
};
use std::path::Path;

use serde_json::{
    Map,
    Value,
};

use crate::table::{
    EntryIssue,
    TableError,
    TranslationEntry,
    TranslationTable,
};
use crate::types::Locale;

/// Output/input representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON array of records
    Json,
    /// One JSON record per line
    JsonLines,
    /// Flat key → text object for a single locale
    Locale(Locale),
}

impl Format {
    /// Guesses the record format from a file extension.
    ///
    /// `.jsonl` and `.ndjson` are JSON Lines; anything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson") => {
                Self::JsonLines
            }
            _ => Self::Json,
        }
    }
}

/// Renders `table` in `format`.
///
/// `pretty` only affects [`Format::Json`] and [`Format::Locale`].
///
/// # Errors
/// Returns [`TableError::Parse`] if serialization fails.
pub fn render(table: &TranslationTable, format: Format, pretty: bool) -> Result<String, TableError> {
    let rendered = match format {
        Format::Json if pretty => serde_json::to_string_pretty(table.entries())?,
        Format::Json => serde_json::to_string(table.entries())?,
        Format::JsonLines => to_json_lines(table)?,
        Format::Locale(locale) => {
            let map = Value::Object(to_locale_map(table, locale));
            if pretty { serde_json::to_string_pretty(&map)? } else { serde_json::to_string(&map)? }
        }
    };
    Ok(rendered)
}

/// One record per line, each line terminated by `\n`.
///
/// # Errors
/// Returns [`TableError::Parse`] if serialization fails.
pub fn to_json_lines(table: &TranslationTable) -> Result<String, TableError> {
    let mut out = String::new();
    for entry in table {
        out.push_str(&serde_json::to_string(entry)?);
        out.push('\n');
    }
    Ok(out)
}

/// Flat key → text object for `locale`, in table order.
#[must_use]
pub fn to_locale_map(table: &TranslationTable, locale: Locale) -> Map<String, Value> {
    table
        .locale_values(locale)
        .map(|(key, text)| (key.to_string(), Value::String(text.to_string())))
        .collect()
}

/// Parses a JSON array of records and validates it.
///
/// # Errors
/// Returns [`TableError::Parse`] for malformed JSON and
/// [`TableError::Invalid`] when the records break table invariants.
pub fn from_json(text: &str) -> Result<TranslationTable, TableError> {
    let entries: Vec<TranslationEntry> = serde_json::from_str(text)?;
    TranslationTable::new(entries)
}

/// Parses JSON Lines. Blank lines are skipped.
///
/// # Errors
/// Returns [`TableError::InvalidRecord`] with the 1-based line number of the
/// first bad line, or [`TableError::Invalid`].
pub fn from_json_lines(text: &str) -> Result<TranslationTable, TableError> {
    let mut entries = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry = serde_json::from_str(line)
            .map_err(|source| TableError::InvalidRecord { line: index + 1, source })?;
        entries.push(entry);
    }
    TranslationTable::new(entries)
}

/// Builds a table from one JSON object per locale.
///
/// Nested objects are flattened with `separator`; key order follows the
/// English object.
///
/// # Errors
/// - [`TableError::NotAnObject`] when a root is not an object
/// - [`TableError::MissingTranslation`] when a key exists in only one locale
/// - [`TableError::Invalid`] when the merged rows break table invariants
pub fn from_locale_maps(
    en: &Value,
    fr: &Value,
    separator: &str,
) -> Result<TranslationTable, TableError> {
    let en_pairs = flatten_locale(en, Locale::En, separator)?;
    let fr_pairs = flatten_locale(fr, Locale::Fr, separator)?;

    // Only the English keys become rows; French duplicates must be caught here.
    let fr_duplicates = duplicate_keys(&fr_pairs);
    if !fr_duplicates.is_empty() {
        return Err(TableError::Invalid(fr_duplicates));
    }

    let en_keys: HashSet<&str> = en_pairs.iter().map(|(key, _)| key.as_str()).collect();
    if let Some((key, _)) = fr_pairs.iter().find(|(key, _)| !en_keys.contains(key.as_str())) {
        return Err(TableError::MissingTranslation { key: key.clone(), locale: Locale::En });
    }

    let fr_values: HashMap<&str, &str> =
        fr_pairs.iter().map(|(key, value)| (key.as_str(), value.as_str())).collect();

    let entries = en_pairs
        .iter()
        .map(|(key, en)| {
            fr_values.get(key.as_str()).map_or_else(
                || Err(TableError::MissingTranslation { key: key.clone(), locale: Locale::Fr }),
                |fr| Ok(TranslationEntry::new(key.as_str(), en.as_str(), *fr)),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    TranslationTable::new(entries)
}

/// `DuplicateKey` issues for keys that appear more than once in `pairs`.
fn duplicate_keys(pairs: &[(String, String)]) -> Vec<EntryIssue> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut issues = Vec::new();
    for (index, (key, _)) in pairs.iter().enumerate() {
        if let Some(&first) = seen.get(key.as_str()) {
            issues.push(EntryIssue::DuplicateKey { key: key.clone(), first, second: index });
        } else {
            seen.insert(key.as_str(), index);
        }
    }
    issues
}

/// Flattens one locale object, rejecting non-object roots.
fn flatten_locale(
    json: &Value,
    locale: Locale,
    separator: &str,
) -> Result<Vec<(String, String)>, TableError> {
    if !json.is_object() {
        return Err(TableError::NotAnObject { locale });
    }
    Ok(flatten_json(json, separator, None))
}

/// Flatten nested JSON object into dot-separated `(key, text)` pairs.
///
/// Order follows the document. Array elements get `[index]` suffixes and
/// non-string leaves are stringified.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use fynelis_i18n::format::flatten_json;
///
/// let json = json!({
///     "nav": {
///         "home": "Home",
///         "contact": "Contact"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened[0], ("nav.home".to_string(), "Home".to_string()));
/// assert_eq!(flattened[1], ("nav.contact".to_string(), "Contact".to_string()));
/// ```
#[must_use]
pub fn flatten_json(json: &Value, separator: &str, prefix: Option<&str>) -> Vec<(String, String)> {
    let mut result = Vec::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive step of [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut Vec<(String, String)>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.push((key.to_string(), s.clone()));
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.push((key.to_string(), json.to_string()));
            }
        }
    }
}

/// Reads and validates a record file, choosing the format from the extension.
///
/// # Errors
/// Returns [`TableError::Io`] if the file cannot be read, otherwise the
/// errors of [`from_json`] / [`from_json_lines`].
pub fn read_table(path: &Path) -> Result<TranslationTable, TableError> {
    tracing::debug!(path = %path.display(), "Reading translation table");

    let content = std::fs::read_to_string(path)?;
    match Format::from_path(path) {
        Format::JsonLines => from_json_lines(&content),
        Format::Json | Format::Locale(_) => from_json(&content),
    }
}

/// Reads a pair of per-locale files (`en.json`, `fr.json`) into one table.
///
/// # Errors
/// Returns [`TableError::Io`] or [`TableError::Parse`] for either file,
/// otherwise the errors of [`from_locale_maps`].
pub fn read_locale_maps(
    en_path: &Path,
    fr_path: &Path,
    separator: &str,
) -> Result<TranslationTable, TableError> {
    tracing::debug!(
        en = %en_path.display(),
        fr = %fr_path.display(),
        separator,
        "Reading per-locale translation files"
    );

    let en: Value = serde_json::from_str(&std::fs::read_to_string(en_path)?)?;
    let fr: Value = serde_json::from_str(&std::fs::read_to_string(fr_path)?)?;
    from_locale_maps(&en, &fr, separator)
}
