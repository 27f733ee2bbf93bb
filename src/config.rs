// Configuration passed from JS as JSON. Every field has a default, so `{}` is a valid config.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::CrawlError;

/// Crawl editor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the film catalog API.
    #[serde(default = "default_catalog_base_url")]
    pub catalog_base_url: String,
    #[serde(default)]
    pub elements: ElementIds,
    /// Class toggled on a field's container while the field is invalid.
    #[serde(default = "default_error_class")]
    pub error_class: String,
    /// trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, CrawlError> {
        let config: AppConfig = serde_json::from_str(json)
            .map_err(|e| CrawlError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn level(&self) -> Result<Level, CrawlError> {
        Level::from_str(self.log_level.trim()).map_err(|_| {
            CrawlError::InvalidConfig(format!("unknown log level `{}`", self.log_level))
        })
    }

    fn validate(&self) -> Result<(), CrawlError> {
        if self.catalog_base_url.trim().is_empty() {
            return Err(CrawlError::InvalidConfig("catalog_base_url is empty".to_string()));
        }
        if self.error_class.trim().is_empty() || self.error_class.contains(char::is_whitespace) {
            return Err(CrawlError::InvalidConfig(format!(
                "error_class `{}` is not a single class name",
                self.error_class
            )));
        }
        self.level()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_base_url: default_catalog_base_url(),
            elements: ElementIds::default(),
            error_class: default_error_class(),
            log_level: default_log_level(),
        }
    }
}

fn default_catalog_base_url() -> String {
    "https://swapi.dev/api/".to_string()
}

fn default_error_class() -> String {
    "error".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Ids of the elements the editor binds to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub film_select: String,
    pub episode_input: String,
    pub title_input: String,
    pub body_input: String,
    /// Animated container; holds the three display slots.
    pub crawl_container: String,
    pub episode_slot: String,
    pub title_slot: String,
    pub body_slot: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            film_select: "film".to_string(),
            episode_input: "episode".to_string(),
            title_input: "title".to_string(),
            body_input: "text".to_string(),
            crawl_container: "scrollText".to_string(),
            episode_slot: "crawlEpisode".to_string(),
            title_slot: "crawlTitle".to_string(),
            body_slot: "crawlBody".to_string(),
        }
    }
}
