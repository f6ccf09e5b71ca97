//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::table::{
    TranslationEntry,
    TranslationTable,
};

/// `(key, en, fr)` の組からテスト用の TranslationTable を作成する
///
/// # Panics
/// 行が不正な場合（テストデータの誤り）
#[allow(clippy::expect_used)]
pub(crate) fn create_table(rows: &[(&str, &str, &str)]) -> TranslationTable {
    let entries =
        rows.iter().map(|&(key, en, fr)| TranslationEntry::new(key, en, fr)).collect::<Vec<_>>();
    TranslationTable::new(entries).expect("test rows must form a valid table")
}
