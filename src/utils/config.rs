use anyhow::Context;
use serde::{Deserialize, Serialize};

const EMBEDDED_CONFIG: &str = include_str!("../../assets/config.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand_name: String,
    pub copyright: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session storage key holding the logged-in user record.
    pub storage_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "Vidify Host".to_string(),
            copyright: "© 2024 Vidify. All rights reserved.".to_string(),
            og_title: "Vidify Host".to_string(),
            og_description: "Upload, share and earn from your videos.".to_string(),
            og_image: "/og-image.png".to_string(),
            og_url: "https://vidify.host".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "user".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse app config")
    }

    /// Loads the config bundled with the build, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e:#}, using defaults");
                Self::default()
            }
        }
    }
}
