use std::env;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::logging::LogLevel;

pub const DEFAULT_CHANNEL_NAME: &str = "GistMate";
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

const LOG_LEVEL_ENV: &str = "GISTMATE_LOG_LEVEL";
const DEBUG_ENV: &str = "GISTMATE_DEBUG";
const DEFAULT_PRIVATE_ENV: &str = "GISTMATE_DEFAULT_PRIVATE";
const API_URL_ENV: &str = "GISTMATE_API_URL";

/// Extension settings. The JS host passes them as an object (camelCase keys,
/// any subset); native hosts read `GISTMATE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub channel_name: String,
    pub log_level: LogLevel,
    /// Mirror every log call to the developer console.
    pub debugging: bool,
    /// Visibility used when the user dismisses the visibility pick.
    #[serde(alias = "defaultPrivacy")]
    pub default_private: bool,
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            log_level: LogLevel::Debug,
            debugging: false,
            default_private: false,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from a variable lookup. Unset, empty or unparsable
    /// values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            channel_name: defaults.channel_name,
            log_level: get(LOG_LEVEL_ENV)
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.log_level),
            debugging: get(DEBUG_ENV)
                .map(|value| parse_flag(&value))
                .unwrap_or(defaults.debugging),
            default_private: get(DEFAULT_PRIVATE_ENV)
                .map(|value| parse_flag(&value))
                .unwrap_or(defaults.default_private),
            api_base_url: get(API_URL_ENV)
                .map(|value| value.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Settings of the current process, read once from the environment.
pub static CONFIG: Lazy<Settings> = Lazy::new(Settings::from_env);

/// How the host launched the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtensionMode {
    #[default]
    Production,
    Development,
    Test,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.channel_name, "GistMate");
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert!(!settings.debugging);
        assert!(!settings.default_private);
        assert_eq!(settings.api_base_url, "https://api.github.com");
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("GISTMATE_LOG_LEVEL", "warn"),
            ("GISTMATE_DEBUG", "true"),
            ("GISTMATE_DEFAULT_PRIVATE", "1"),
            ("GISTMATE_API_URL", "https://ghe.example.com/api/v3/"),
        ]));
        assert_eq!(settings.log_level, LogLevel::Warn);
        assert!(settings.debugging);
        assert!(settings.default_private);
        assert_eq!(settings.api_base_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let settings = Settings::from_lookup(lookup(&[
            ("GISTMATE_LOG_LEVEL", "chatty"),
            ("GISTMATE_API_URL", "   "),
        ]));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_flags() {
        assert!(parse_flag("YES"));
        assert!(parse_flag(" on "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_deserialize_partial_host_object() {
        let settings: Settings =
            serde_json::from_str(r#"{"logLevel": "info", "defaultPrivacy": true}"#).unwrap();
        assert_eq!(settings.log_level, LogLevel::Info);
        assert!(settings.default_private);
        assert_eq!(settings.channel_name, "GistMate");
    }

    #[test]
    fn test_extension_mode_names() {
        let mode: ExtensionMode = serde_json::from_str("\"development\"").unwrap();
        assert_eq!(mode, ExtensionMode::Development);
    }
}
