//! Runtime configuration for the web manager UI
//!
//! The API base URL is resolved once at start-up and handed to the component
//! tree through Leptos context. Layers, later wins:
//!
//! 1. built-in defaults
//! 2. build-time environment (`TWB_API_BASE_URL`, `TWB_LOG_LEVEL`)
//! 3. a JSON document embedded in the host page:
//!
//! ```html
//! <script id="twb-config" type="application/json">
//!   { "api_base_url": "https://bot.example.org/api", "log_level": "debug" }
//! </script>
//! ```
//!
//! A layer that fails validation is skipped and reported; the previous layer
//! stays in effect.

use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;

/// Default API origin of the bot's web manager server
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `id` of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "twb-config";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin plus path prefix every API path is joined onto
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Partial config: only the fields a layer actually sets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub api_base_url: Option<String>,
    pub log_level: Option<String>,
}

impl ConfigLayer {
    /// Values baked in by the bundler from the build environment.
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("TWB_API_BASE_URL").map(String::from),
            log_level: option_env!("TWB_LOG_LEVEL").map(String::from),
        }
    }

    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(document).map_err(|e| ConfigError::Json(e.to_string()))
    }

    fn is_empty(&self) -> bool {
        self.api_base_url.is_none() && self.log_level.is_none()
    }
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// Apply `layer` on top of `self`, returning the validated result.
    pub fn merged(&self, layer: &ConfigLayer) -> Result<Self, ConfigError> {
        let mut next = self.clone();
        if let Some(base) = &layer.api_base_url {
            next.api_base_url = base.clone();
        }
        if let Some(level) = &layer.log_level {
            next.log_level = level.clone();
        }
        next.normalize();
        next.validate()?;
        Ok(next)
    }

    /// Resolve defaults, build environment and an optional embedded document.
    ///
    /// Returns the effective config and every layer that was rejected.
    pub fn resolve(document: Option<&str>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        let build_env = ConfigLayer::from_build_env();
        if !build_env.is_empty() {
            match config.merged(&build_env) {
                Ok(next) => config = next,
                Err(e) => rejected.push(e),
            }
        }

        if let Some(document) = document {
            match ConfigLayer::from_json(document).and_then(|layer| config.merged(&layer)) {
                Ok(next) => config = next,
                Err(e) => rejected.push(e),
            }
        }

        (config, rejected)
    }

    /// Browser start-up: resolve against the page's embedded config element.
    pub fn load() -> (Self, Vec<ConfigError>) {
        let document = embedded_document();
        Self::resolve(document.as_deref())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api_base_url.as_str();
        let has_scheme = base.starts_with("http://") || base.starts_with("https://");
        let is_valid_base = if has_scheme {
            base.split_once("://").is_some_and(|(_, rest)| !rest.is_empty())
        } else {
            base.starts_with('/')
        };
        if !is_valid_base {
            return Err(ConfigError::InvalidBaseUrl(self.api_base_url.clone()));
        }

        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        Ok(())
    }

    /// Configured tracing level; `INFO` if the value never validated.
    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    /// Strips trailing `/`, except that a bare same-origin root stays `/`.
    fn normalize(&mut self) {
        let trimmed = self.api_base_url.trim();
        let stripped = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            stripped => stripped,
        };
        self.api_base_url = stripped.to_string();
        self.log_level = self.log_level.trim().to_string();
    }
}

/// Text of the `#twb-config` element, if the host page has one.
fn embedded_document() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000/api");
        assert_eq!(config.level(), Level::INFO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_document_overrides_defaults() {
        let (config, rejected) = AppConfig::resolve(Some(
            r#"{ "api_base_url": "https://bot.example.org/api/", "log_level": "debug" }"#,
        ));
        assert!(rejected.is_empty());
        assert_eq!(config.api_base_url, "https://bot.example.org/api");
        assert_eq!(config.level(), Level::DEBUG);
    }

    #[test]
    fn test_partial_document_keeps_other_fields() {
        let (config, rejected) = AppConfig::resolve(Some(r#"{ "log_level": "warn" }"#));
        assert!(rejected.is_empty());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.level(), Level::WARN);
    }

    #[test]
    fn test_relative_base_url_is_accepted() {
        let layer = ConfigLayer {
            api_base_url: Some("/api".into()),
            log_level: None,
        };
        let config = AppConfig::default().merged(&layer).unwrap();
        assert_eq!(config.api_base_url, "/api");
    }

    #[test]
    fn test_same_origin_root_base_is_kept() {
        let layer = ConfigLayer {
            api_base_url: Some("/".into()),
            log_level: None,
        };
        let config = AppConfig::default().merged(&layer).unwrap();
        assert_eq!(config.api_base_url, "/");

        let layer = ConfigLayer {
            api_base_url: Some("//".into()),
            log_level: None,
        };
        let config = AppConfig::default().merged(&layer).unwrap();
        assert_eq!(config.api_base_url, "/");
    }

    #[test]
    fn test_blank_base_url_rejected() {
        let layer = ConfigLayer {
            api_base_url: Some("  ".into()),
            log_level: None,
        };
        assert_eq!(
            AppConfig::default().merged(&layer),
            Err(ConfigError::InvalidBaseUrl(String::new()))
        );
    }

    #[test]
    fn test_invalid_layer_is_rejected_and_previous_kept() {
        let (config, rejected) =
            AppConfig::resolve(Some(r#"{ "api_base_url": "ftp://nope" }"#));
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            rejected,
            vec![ConfigError::InvalidBaseUrl("ftp://nope".into())]
        );
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let layer = ConfigLayer {
            api_base_url: None,
            log_level: Some("loud".into()),
        };
        assert_eq!(
            AppConfig::default().merged(&layer),
            Err(ConfigError::InvalidLogLevel("loud".into()))
        );
    }

    #[test]
    fn test_malformed_document() {
        let (config, rejected) = AppConfig::resolve(Some("{ not json"));
        assert_eq!(config, AppConfig::default());
        assert!(matches!(rejected.as_slice(), [ConfigError::Json(_)]));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let (_, rejected) = AppConfig::resolve(Some(r#"{ "base": "http://x" }"#));
        assert!(matches!(rejected.as_slice(), [ConfigError::Json(_)]));
    }

    #[test]
    fn test_empty_scheme_host_rejected() {
        let config = AppConfig::new("http://");
        assert!(config.validate().is_err());
    }
}
