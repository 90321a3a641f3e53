//! Application Configuration
//!
//! Read from `config/gravity-doc.json`, embedded at build time. Every field
//! has a default so a partial file still works.

use serde::{Deserialize, Serialize};
use screen_tree::{NestZone, UploadLimits};

const EMBEDDED_CONFIG: &str = include_str!("../config/gravity-doc.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub upload: UploadLimits,
    #[serde(default)]
    pub dnd: NestZone,
    #[serde(default)]
    pub description: DescriptionConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionConfig {
    /// Counter turns into a warning past this many characters
    #[serde(default = "default_soft_limit")]
    pub soft_limit: usize,
}

fn default_soft_limit() -> usize {
    500
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self { soft_limit: default_soft_limit() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Simulated "thinking" time before a mocked artifact appears
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u32,
}

fn default_delay_ms() -> u32 {
    1200
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { delay_ms: default_delay_ms() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Lines kept by the rolling logger
    #[serde(default = "default_log_capacity")]
    pub capacity: usize,
    /// `"error"`, `"warn"`, `"info"`, `"debug"` or `"trace"`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_capacity() -> usize {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            capacity: default_log_capacity(),
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

pub fn parse(text: &str) -> Result<AppConfig, serde_json::Error> {
    serde_json::from_str(text)
}

/// Load the embedded config, falling back to defaults.
///
/// The second value is a warning to log once logging is up.
pub fn load() -> (AppConfig, Option<String>) {
    match parse(EMBEDDED_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(format!("Invalid config, using defaults: {}", err))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let (config, warning) = load();
        assert!(warning.is_none());
        assert_eq!(config.upload.max_files, 20);
        assert_eq!(config.upload.accepted_mime_prefix, "image/");
        assert_eq!(config.dnd.threshold, 0.75);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse(r#"{ "upload": { "max_files": 5 } }"#).unwrap();
        assert_eq!(config.upload.max_files, 5);
        assert_eq!(config.upload.accepted_mime_prefix, "image/");
        assert_eq!(config.description.soft_limit, 500);
        assert_eq!(config.generation.delay_ms, 1200);
        assert_eq!(config.log.capacity, 200);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(parse("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse("{ not json").is_err());
    }

    #[test]
    fn test_log_level_filter() {
        let mut log = LogConfig::default();
        assert_eq!(log.level_filter(), log::LevelFilter::Info);
        log.level = "debug".to_string();
        assert_eq!(log.level_filter(), log::LevelFilter::Debug);
        log.level = "loud".to_string();
        assert_eq!(log.level_filter(), log::LevelFilter::Info);
    }
}
