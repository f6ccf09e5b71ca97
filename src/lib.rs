//! fynelis-i18n
//!
//! Fynelis ランディングページ向けの英語 / フランス語翻訳テーブル

pub mod config;
pub mod format;
pub mod landing;
pub mod resolver;
pub mod table;
#[cfg(test)]
mod test_utils;
pub mod types;

pub use landing::{
    all_keys,
    landing_page,
    lookup,
};
pub use resolver::Translator;
pub use table::{
    LookupError,
    TableError,
    TranslationEntry,
    TranslationTable,
};
pub use types::Locale;
