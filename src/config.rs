//! Page-level configuration.
//!
//! Defaults reproduce the homepage's built-in behavior. A page may override
//! any subset of fields with a JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">{ "toast_ms": 2000 }</script>
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::state::drawer::DrawerPolicy;
use crate::state::spy::DEFAULT_THRESHOLDS;
use crate::state::theme::THEME_STORAGE_KEY;
use crate::state::toast::DEFAULT_TOAST_MS;
use crate::util::animation::AnimationOptions;
use crate::util::contact::{ContactField, default_contacts};

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Warn;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub toast_ms: u32,
    pub theme_storage_key: String,
    pub contacts: Vec<ContactField>,
    pub drawer: DrawerPolicy,
    pub spy_thresholds: Vec<f64>,
    pub animation: AnimationOptions,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            toast_ms: DEFAULT_TOAST_MS,
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            contacts: default_contacts(),
            drawer: DrawerPolicy::default(),
            spy_thresholds: DEFAULT_THRESHOLDS.to_vec(),
            animation: AnimationOptions::default(),
            log_level: DEFAULT_LOG_LEVEL.as_str().to_ascii_lowercase(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        if config.spy_thresholds.is_empty() {
            config.spy_thresholds = DEFAULT_THRESHOLDS.to_vec();
        }
        Ok(config)
    }

    /// Resolve the configured log level, falling back to `warn`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Read `#site-config` from the document, if present.
    ///
    /// Returns the defaults together with the parse error when the block is
    /// malformed so the caller can report it once logging is up.
    #[cfg(feature = "csr")]
    pub fn from_document(document: &web_sys::Document) -> (Self, Option<ConfigError>) {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return (Self::default(), None);
        };
        match Self::from_json(&raw) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
