//! App Configuration
//!
//! Built-in settings, read from `config/app.json` at compile time.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{UiError, UiResult};
use crate::i18n::Language;

/// Embedded configuration document
pub const EMBEDDED_CONFIG: &str = include_str!("../config/app.json");

/// Visual variant applied to cards and panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Translucent cards over a gradient
    #[default]
    Glass,
    Plain,
}

impl Theme {
    pub fn card_class(&self) -> &'static str {
        match self {
            Theme::Glass => "card glass-card",
            Theme::Plain => "card",
        }
    }

    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Glass => "app-layout theme-glass",
            Theme::Plain => "app-layout theme-plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub default_language: Language,
    pub plan_name: String,
    /// Codes included in the plan
    pub qr_quota: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            default_language: Language::default(),
            plan_name: "Pro Plan".to_string(),
            qr_quota: 100,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> UiResult<Self> {
        serde_json::from_str(text).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Unrecognized level names fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.theme, Theme::Glass);
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.qr_quota, 100);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = AppConfig::from_json(r#"{"theme":"plain","default_language":"bn"}"#).unwrap();
        assert_eq!(config.theme, Theme::Plain);
        assert_eq!(config.default_language, Language::Bn);
        assert_eq!(config.plan_name, "Pro Plan");
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(matches!(AppConfig::from_json("{"), Err(UiError::Config(_))));
        assert!(matches!(AppConfig::from_json(r#"{"theme":"neon"}"#), Err(UiError::Config(_))));
    }

    #[test]
    fn test_level_filter() {
        let config = AppConfig { log_level: "debug".to_string(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        let config = AppConfig { log_level: "loud".to_string(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
