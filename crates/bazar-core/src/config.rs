//! Site Configuration
//!
//! Every field has a default matching the live site, so pages can embed a
//! partial JSON object (or none at all).

use std::collections::BTreeMap;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::banner::{default_banners, Banner};
use crate::counter::{default_stats, Stat};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Storage key of the cart array.
    pub cart_key: String,
    /// Storage key of the category click map.
    pub clicks_key: String,
    /// How long a notification stays before sliding out.
    pub notification_ms: u32,
    /// Length of the slide-out animation.
    pub notification_exit_ms: u32,
    pub banner_interval_ms: u32,
    pub counter_tick_ms: u32,
    pub counter_steps: u32,
    /// Delay between category card entrance animations.
    pub card_stagger_ms: u32,
    /// Page name to href, used by `showPage`.
    pub pages: BTreeMap<String, String>,
    pub banners: Vec<Banner>,
    pub stats: Vec<Stat>,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let pages = [
            ("home", "index.html"),
            ("fashion", "fashion.html"),
            ("electronics", "electronic.html"),
            ("bikes", "bike.html"),
            ("login", "login.html"),
        ]
        .into_iter()
        .map(|(name, href)| (name.to_string(), href.to_string()))
        .collect();

        Self {
            cart_key: "bazarbd_cart".to_string(),
            clicks_key: "category_clicks".to_string(),
            notification_ms: 3000,
            notification_exit_ms: 300,
            banner_interval_ms: 5000,
            counter_tick_ms: 20,
            counter_steps: 100,
            card_stagger_ms: 200,
            pages,
            banners: default_banners(),
            stats: default_stats(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.banners.is_empty() {
            return Err(ConfigError::NoBanners);
        }
        if self.counter_steps == 0 {
            return Err(ConfigError::ZeroCounterSteps);
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Resolve a page name to its href.
    pub fn page_url(&self, name: &str) -> Option<&str> {
        self.pages.get(name).map(String::as_str)
    }
}
