use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use reqwest::Url;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::domain::models::{RangeParseError, SheetRange};

/// Project configuration file, committed alongside the project.
pub const PROJECT_CONFIG: &str = ".mealsheet/config.yaml";
/// Machine-local overrides, typically holding the API key.
pub const LOCAL_CONFIG: &str = ".mealsheet/local.yaml";
/// Prefix of overriding environment variables; nesting is split on `__`.
pub const ENV_PREFIX: &str = "MEALSHEET_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid sheet range: {0}")]
    InvalidRange(#[from] RangeParseError),

    #[error("Invalid base URL: {0}. Must be an absolute http(s) URL")]
    InvalidBaseUrl(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Builds a [`Config`] from defaults, YAML files and the environment.
///
/// Later sources win:
/// 1. built-in defaults
/// 2. [`PROJECT_CONFIG`], then [`LOCAL_CONFIG`] (or a single explicit file)
/// 3. `MEALSHEET_*` variables, e.g. `MEALSHEET_SHEETS__API_KEY`
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the `.mealsheet/` files in the working directory.
    ///
    /// Missing files are skipped.
    pub fn load() -> Result<Config> {
        let figment = Self::defaults()
            .merge(Yaml::file(PROJECT_CONFIG))
            .merge(Yaml::file(LOCAL_CONFIG))
            .merge(Self::env());
        Self::finish(&figment).context("Failed to load configuration")
    }

    /// Load from `path` instead of the `.mealsheet/` files.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let figment = Self::defaults()
            .merge(Yaml::file(path))
            .merge(Self::env());
        Self::finish(&figment)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    fn finish(figment: &Figment) -> Result<Config> {
        let config: Config = figment.extract()?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Check the values that can be checked without contacting the API.
    ///
    /// A missing API key or sheet id is accepted here; store operations
    /// report it when they are attempted.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        config.sheets.range.parse::<SheetRange>()?;

        let base = &config.sheets.base_url;
        let usable = Url::parse(base).is_ok_and(|url| {
            matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base()
        });
        if !usable {
            return Err(ConfigError::InvalidBaseUrl(base.clone()));
        }

        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::LogFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults_pass_validation() {
        let config = Config::default();
        assert_eq!(config.sheets.range, "Sheet1!A:Z");
        assert_eq!(config.logging.level, "warn");
        assert!(config.sheets.api_key().is_none());
        assert!(config.sheets.sheet_id().is_none());
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_range_without_sheet_is_rejected() {
        let mut config = Config::default();
        config.sheets.range = "A:Z".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidRange(RangeParseError::MissingSheet(_)))
        ));
    }

    #[test]
    fn test_bare_sheet_name_is_rejected() {
        let mut config = Config::default();
        config.sheets.range = "Sheet1".to_string();

        let err = ConfigLoader::validate(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRange(RangeParseError::MissingColumns(_))
        ));
        assert!(err.to_string().contains("missing a column span"));
    }

    #[test]
    fn test_unusable_base_urls_are_rejected() {
        for base in ["not a url", "ftp://example.com/v4", "mailto:me@example.com"] {
            let mut config = Config::default();
            config.sheets.base_url = base.to_string();

            match ConfigLoader::validate(&config) {
                Err(ConfigError::InvalidBaseUrl(url)) => assert_eq!(url, base),
                other => panic!("Expected InvalidBaseUrl for {base}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_log_level_is_checked_case_insensitively() {
        let mut config = Config::default();
        config.logging.level = "DEBUG".to_string();
        assert!(ConfigLoader::validate(&config).is_ok());

        config.logging.level = "verbose".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(level)) if level == "verbose"
        ));
    }

    #[test]
    fn test_file_values_overlay_defaults() {
        let file = yaml_file(
            "sheets:\n  sheet_id: sheet-from-file\n  range: Meals!A:F\nlogging:\n  format: json\n",
        );

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.sheets.sheet_id(), Some("sheet-from-file"));
        assert_eq!(config.sheets.range, "Meals!A:F");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.sheets.base_url,
            "https://sheets.googleapis.com/v4/spreadsheets"
        );
    }

    #[test]
    fn test_invalid_file_values_fail_the_load() {
        let file = yaml_file("sheets:\n  range: nonsense\n");
        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config from"));
    }

    #[test]
    fn test_local_file_overrides_project_file() {
        let project = yaml_file("sheets:\n  sheet_id: project-sheet\nlogging:\n  level: info\n");
        let local = yaml_file("sheets:\n  api_key: local-key\nlogging:\n  level: debug\n");

        let config: Config = ConfigLoader::defaults()
            .merge(Yaml::file(project.path()))
            .merge(Yaml::file(local.path()))
            .extract()
            .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.sheets.api_key(), Some("local-key"));
        assert_eq!(config.sheets.sheet_id(), Some("project-sheet"));
    }

    #[test]
    fn test_environment_wins_over_file() {
        let file = yaml_file("sheets:\n  sheet_id: from-file\n  api_key: file-key\n");

        temp_env::with_vars(
            [
                ("MEALSHEET_SHEETS__API_KEY", Some("env-key")),
                ("MEALSHEET_LOGGING__LEVEL", Some("error")),
            ],
            || {
                let config = ConfigLoader::load_from_file(file.path()).unwrap();
                assert_eq!(config.sheets.api_key(), Some("env-key"));
                assert_eq!(config.sheets.sheet_id(), Some("from-file"));
                assert_eq!(config.logging.level, "error");
            },
        );
    }
}
