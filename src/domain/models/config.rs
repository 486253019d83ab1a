use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure for mealsheet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Remote sheet configuration
    #[serde(default)]
    pub sheets: SheetsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the spreadsheet values API
///
/// `api_key` and `sheet_id` may be absent at load time; store operations
/// refuse to run until both are set.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SheetsConfig {
    /// API key sent as the `key` query parameter
    #[serde(default)]
    pub api_key: Option<String>,

    /// Spreadsheet id, as found in the sheet's URL
    #[serde(default)]
    pub sheet_id: Option<String>,

    /// Scan range in A1 notation; column A holds the meal name
    #[serde(default = "default_range")]
    pub range: String,

    /// Values API endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_range() -> String {
    "Sheet1!A:Z".to_string()
}

fn default_base_url() -> String {
    "https://sheets.googleapis.com/v4/spreadsheets".to_string()
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            sheet_id: None,
            range: default_range(),
            base_url: default_base_url(),
        }
    }
}

impl SheetsConfig {
    /// Present, non-blank API key.
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref())
    }

    /// Present, non-blank sheet id.
    pub fn sheet_id(&self) -> Option<&str> {
        non_blank(self.sheet_id.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("sheet_id", &self.sheet_id)
            .field("range", &self.range)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for log files (logs only to stderr when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheets_defaults() {
        let config = SheetsConfig::default();
        assert_eq!(config.range, "Sheet1!A:Z");
        assert_eq!(
            config.base_url,
            "https://sheets.googleapis.com/v4/spreadsheets"
        );
        assert!(config.api_key().is_none());
        assert!(config.sheet_id().is_none());
    }

    #[test]
    fn test_blank_values_count_as_absent() {
        let config = SheetsConfig {
            api_key: Some("   ".to_string()),
            sheet_id: Some(String::new()),
            ..Default::default()
        };
        assert!(config.api_key().is_none());
        assert!(config.sheet_id().is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = SheetsConfig {
            api_key: Some("AIzaSySecretValue".to_string()),
            sheet_id: Some("sheet-123".to_string()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("AIzaSySecretValue"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("sheet-123"));
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
sheets:
  api_key: abc
  sheet_id: sheet-1
  range: Meals!A:H
logging:
  level: debug
  format: json
";
        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");
        assert_eq!(config.sheets.api_key(), Some("abc"));
        assert_eq!(config.sheets.range, "Meals!A:H");
        assert_eq!(
            config.sheets.base_url,
            "https://sheets.googleapis.com/v4/spreadsheets"
        );
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.rotation, RotationPolicy::Daily);
    }
}
