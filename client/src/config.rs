//! Site configuration with built-in defaults.
//!
//! The CSR build may override the defaults with a JSON object embedded in
//! `index.html` as `<script id="site-config" type="application/json">`.
//! Every field is optional; unknown fields are rejected so typos surface.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_IMAGE_SERVICE_URL: &str = "https://placeholder-image-service.onrender.com";
pub const DEFAULT_IMAGE_REQUEST_ID: &str = "c784fe7a-ee1d-41fb-8514-732318e0ec91";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// DOM id of the element carrying the embedded config JSON.
#[cfg(feature = "csr")]
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Error returned by [`SiteConfig::load`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("image service URL must not be empty")]
    EmptyImageServiceUrl,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Base URL of the image provisioning service.
    pub image_service_url: String,
    /// Request id appended to every image URL.
    pub image_request_id: String,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            image_service_url: DEFAULT_IMAGE_SERVICE_URL.to_owned(),
            image_request_id: DEFAULT_IMAGE_REQUEST_ID.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Build config from optional embedded JSON.
    ///
    /// `None` or a blank string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a value is invalid.
    pub fn load(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };
        let mut config: Self = serde_json::from_str(raw)?;
        config.image_service_url = config.image_service_url.trim().trim_end_matches('/').to_owned();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.image_service_url.is_empty() {
            return Err(ConfigError::EmptyImageServiceUrl);
        }
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        Ok(())
    }

    /// Parsed log level, `info` when the stored value is not a level name.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Text of the embedded config element, if the page has one.
#[cfg(feature = "csr")]
pub fn embedded_config_json() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}
