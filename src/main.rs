//! Command-line access to the landing page translations.

use std::io::{
    self,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
    ValueEnum,
};
use fynelis_i18n::config::{
    ConfigError,
    ConfigManager,
    ExportFormat,
};
use fynelis_i18n::format;
use fynelis_i18n::{
    Locale,
    LookupError,
    TableError,
    Translator,
    landing_page,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "fynelis-i18n")]
#[command(version)]
#[command(about = "English/French translations for the Fynelis landing page")]
struct Cli {
    /// Settings file (default: .fynelis-i18n.json in the current directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every key in page order
    Keys,

    /// Print the text stored for a key
    Lookup {
        #[arg(value_name = "KEY")]
        key: String,

        /// Locale tag (en, fr, fr-CA, ...); defaults to the configured locale
        #[arg(short, long)]
        locale: Option<String>,

        /// Fall back instead of failing on an unknown key or locale
        #[arg(long)]
        fallback: bool,
    },

    /// Write the table as JSON, JSON Lines or a per-locale object
    Export {
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Locale for `--format locale`
        #[arg(short, long)]
        locale: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Validate a table file (.json or .jsonl) or a pair of per-locale files
    Check {
        #[arg(value_name = "FILE", required_unless_present = "en", conflicts_with = "en")]
        file: Option<PathBuf>,

        /// English `{ key: text }` file, flattened with `keySeparator`
        #[arg(long, value_name = "FILE", requires = "fr")]
        en: Option<PathBuf>,

        /// French `{ key: text }` file
        #[arg(long, value_name = "FILE", requires = "en")]
        fr: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    JsonLines,
    Locale,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::JsonLines => Self::JsonLines,
            FormatArg::Locale => Self::Locale,
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Nothing to check: pass FILE, or both --en and --fr")]
    MissingCheckInput,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Executes one command, writing its output to `out`.
fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), CliError> {
    let mut config = ConfigManager::new();
    match &cli.config {
        Some(path) => config.load_file(path)?,
        None => config.load_settings(Some(Path::new(".")))?,
    }
    let settings = config.get_settings();
    let table = landing_page();

    match cli.command {
        Commands::Keys => {
            for key in table.all_keys() {
                writeln!(out, "{key}")?;
            }
        }
        Commands::Lookup { key, locale, fallback } => {
            let tag = locale.as_deref().unwrap_or_else(|| settings.default_locale.code());
            if fallback {
                let translator = Translator::new(table, settings);
                writeln!(out, "{}", translator.translate(&key, tag))?;
            } else {
                writeln!(out, "{}", table.lookup_tag(&key, tag)?)?;
            }
        }
        Commands::Export { format: format_arg, locale, output, compact } => {
            let locale = match locale {
                Some(tag) => Locale::parse_tag(&tag)?,
                None => settings.default_locale,
            };
            let export_format = format_arg.map_or(settings.export.format, ExportFormat::from);
            let pretty = settings.export.pretty && !compact;

            let mut rendered = format::render(table, export_format.with_locale(locale), pretty)?;
            if !rendered.ends_with('\n') {
                rendered.push('\n');
            }

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    tracing::info!(path = %path.display(), entries = table.len(), "Exported translations");
                }
                None => out.write_all(rendered.as_bytes())?,
            }
        }
        Commands::Check { file, en, fr } => {
            let (label, checked) = match (file, en, fr) {
                (Some(file), _, _) => (file.display().to_string(), format::read_table(&file)?),
                (None, Some(en), Some(fr)) => (
                    format!("{} + {}", en.display(), fr.display()),
                    format::read_locale_maps(&en, &fr, &settings.key_separator)?,
                ),
                _ => return Err(CliError::MissingCheckInput),
            };
            writeln!(out, "{label}: {} entries, ok", checked.len())?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// 引数を解析して実行し、標準出力の内容を返す
    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("fynelis-i18n").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[googletest::test]
    fn test_keys_in_page_order() {
        let output = run_args(&["keys"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        expect_that!(lines.len(), eq(19));
        expect_that!(lines.first().copied(), some(eq("hero_title_word_trade")));
        expect_that!(lines.last().copied(), some(eq("footer_legal")));
    }

    #[rstest]
    #[case::english(&["lookup", "nav_home", "--locale", "en"], "Home\n")]
    #[case::french(&["lookup", "cta_try_now", "-l", "fr"], "Essayer maintenant\n")]
    #[case::default_locale(&["lookup", "footer_sitemap"], "Sitemap\n")]
    #[case::fallback_key(&["lookup", "nonexistent_key", "--fallback"], "nonexistent_key\n")]
    #[case::fallback_locale(&["lookup", "nav_home", "-l", "de", "--fallback"], "Home\n")]
    fn test_lookup_output(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(run_args(args).unwrap(), expected);
    }

    #[googletest::test]
    fn test_strict_lookup_missing_key_fails() {
        let result = run_args(&["lookup", "nonexistent_key"]);

        assert!(matches!(
            result,
            Err(CliError::Lookup(LookupError::KeyNotFound { key })) if key == "nonexistent_key"
        ));
    }

    #[googletest::test]
    fn test_strict_lookup_unsupported_locale_fails() {
        let result = run_args(&["lookup", "nav_home", "--locale", "de"]);

        assert!(matches!(result, Err(CliError::Lookup(LookupError::UnsupportedLocale { .. }))));
    }

    #[googletest::test]
    fn test_export_json_is_pretty_by_default() {
        let output = run_args(&["export"]).unwrap();

        expect_that!(output.starts_with("[\n  {"), eq(true));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        expect_that!(parsed.as_array().map(Vec::len), some(eq(19)));
    }

    #[googletest::test]
    fn test_export_compact_overrides_pretty() {
        let output = run_args(&["export", "--compact"]).unwrap();

        expect_that!(output.lines().count(), eq(1));
        expect_that!(output.ends_with("]\n"), eq(true));
    }

    #[googletest::test]
    fn test_export_locale_object() {
        let output = run_args(&["export", "--format", "locale", "--locale", "fr", "--compact"]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        expect_that!(parsed.get("nav_home").and_then(|v| v.as_str()), some(eq("Accueil")));
        expect_that!(parsed.get("footer_legal").and_then(|v| v.as_str()), some(eq("Mentions légales")));
    }

    #[googletest::test]
    fn test_export_settings_from_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.json");
        fs::write(
            &config_path,
            r#"{"defaultLocale": "fr", "export": {"format": "locale", "pretty": false}}"#,
        )
        .unwrap();

        let output = run_args(&["export", "--config", config_path.to_str().unwrap()]).unwrap();

        expect_that!(output.lines().count(), eq(1));
        expect_that!(output.starts_with(r#"{"hero_title_word_trade":"Tradez""#), eq(true));
    }

    #[googletest::test]
    fn test_export_to_file_leaves_stdout_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.jsonl");

        let output =
            run_args(&["export", "--format", "json-lines", "--output", path.to_str().unwrap()])
                .unwrap();

        expect_that!(output.is_empty(), eq(true));
        let written = fs::read_to_string(&path).unwrap();
        expect_that!(written.lines().count(), eq(19));
    }

    #[googletest::test]
    fn test_check_reports_entry_count() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.json");
        fs::write(&path, r#"[{"key": "nav_home", "en": "Home", "fr": "Accueil"}]"#).unwrap();

        let output = run_args(&["check", path.to_str().unwrap()]).unwrap();

        expect_that!(output.trim_end().ends_with(": 1 entries, ok"), eq(true));
    }

    #[googletest::test]
    fn test_check_rejects_duplicate_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.jsonl");
        let record = r#"{"key": "nav_home", "en": "Home", "fr": "Accueil"}"#;
        fs::write(&path, format!("{record}\n{record}\n")).unwrap();

        let result = run_args(&["check", path.to_str().unwrap()]);

        assert!(matches!(result, Err(CliError::Table(TableError::Invalid(_)))));
    }

    #[googletest::test]
    fn test_check_locale_files_with_configured_separator() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.json");
        let en_path = temp_dir.path().join("en.json");
        let fr_path = temp_dir.path().join("fr.json");
        fs::write(&config_path, r#"{"keySeparator": "_"}"#).unwrap();
        fs::write(&en_path, r#"{"nav": {"home": "Home", "contact": "Contact"}}"#).unwrap();
        fs::write(&fr_path, r#"{"nav": {"home": "Accueil", "contact": "Contact"}}"#).unwrap();

        let output = run_args(&[
            "check",
            "--config",
            config_path.to_str().unwrap(),
            "--en",
            en_path.to_str().unwrap(),
            "--fr",
            fr_path.to_str().unwrap(),
        ])
        .unwrap();

        expect_that!(output.trim_end().ends_with(": 2 entries, ok"), eq(true));
    }

    #[rstest]
    #[case::nothing(&["check"])]
    #[case::english_only(&["check", "--en", "en.json"])]
    #[case::file_and_pair(&["check", "t.json", "--en", "en.json", "--fr", "fr.json"])]
    fn test_check_argument_combinations_rejected(#[case] args: &[&str]) {
        let result = Cli::try_parse_from(std::iter::once("fynelis-i18n").chain(args.iter().copied()));

        assert!(result.is_err());
    }
}
