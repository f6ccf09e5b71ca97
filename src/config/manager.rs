//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    I18nSettings,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: I18nSettings,

    /// 読み込んだ設定ファイルのパス（デフォルト設定の場合は None）
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: I18nSettings::default(), source: None }
    }

    /// ディレクトリから設定を読み込む
    ///
    /// 設定ファイルが無ければデフォルト値を使う。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, root: Option<&Path>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings from: {:?}", root);

        let settings = match root {
            Some(root) => loader::load_from_dir(root)?,
            None => None,
        };

        let source = settings.as_ref().and(root).map(|root| root.join(loader::CONFIG_FILE_NAME));
        self.apply(settings.unwrap_or_default(), source)
    }

    /// 指定された設定ファイルを読み込む
    ///
    /// # Errors
    /// - ファイルが存在しない、または読み込めない
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let settings = loader::load_from_file(path)?;
        self.apply(settings, Some(path.to_path_buf()))
    }

    /// 設定を更新する
    ///
    /// 設定ファイル由来ではなくなるため `source` は None になる。
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn update_settings(&mut self, new_settings: I18nSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        self.source = None;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &I18nSettings {
        &self.current_settings
    }

    /// 設定ファイルのパスを取得
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// バリデーション後に設定を保存
    fn apply(&mut self, settings: I18nSettings, source: Option<PathBuf>) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.source = source;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }
}
