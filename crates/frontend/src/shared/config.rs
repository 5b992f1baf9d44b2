use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Prefix of every dataset file; empty for paths relative to the page
    pub base_path: String,
    pub cohort: String,
    pub rfm: String,
    pub descriptive: String,
    /// Fetch all datasets right after startup
    pub preload: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_path: "assets/data".to_string(),
            cohort: "sample-cohort.json".to_string(),
            rfm: "sample-rfm.json".to_string(),
            descriptive: "sample-descriptive.json".to_string(),
            preload: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Route shown when the page opens without a hash
    pub default_route: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_route: "/".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[data]
base_path = "assets/data"
cohort = "sample-cohort.json"
rfm = "sample-rfm.json"
descriptive = "sample-descriptive.json"
preload = false

[ui]
default_route = "/"
"#;

/// Element holding an optional TOML override inside `index.html`.
const CONFIG_ELEMENT_ID: &str = "dashboard-config";

impl AppConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// Load configuration
///
/// Search order:
/// 1. `<script id="dashboard-config" type="application/toml">` in the page
/// 2. Falls back to embedded default config
pub fn load_config() -> AppConfig {
    let override_source = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let source = match override_source {
        Some(source) => {
            log::info!("Loading config from #{}", CONFIG_ELEMENT_ID);
            source
        }
        None => DEFAULT_CONFIG.to_string(),
    };

    AppConfig::from_toml(&source).unwrap_or_else(|err| {
        log::warn!("{}; using defaults", err);
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data.cohort, "sample-cohort.json");
        assert!(!config.data.preload);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = AppConfig::from_toml("[data]\npreload = true\n").unwrap();
        assert!(config.data.preload);
        assert_eq!(config.data.base_path, "assets/data");
        assert_eq!(config.ui.default_route, "/");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml("[data\npreload = yes").is_err());
    }
}
