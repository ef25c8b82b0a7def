//! Requests for the image provisioning service.
//!
//! Images are addressed by a descriptive prompt and target dimensions. The
//! service is opaque: a failed request shows up as a broken image with its
//! alt text, and no fallback is attempted.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::config::SiteConfig;

/// One illustrative image to fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
}

impl ImageRequest {
    #[must_use]
    pub fn new(prompt: impl Into<String>, width: u32, height: u32) -> Self {
        Self { prompt: prompt.into(), width, height }
    }

    /// Absolute URL for this request against the configured service.
    #[must_use]
    pub fn url(&self, config: &SiteConfig) -> String {
        format!(
            "{}/image/{}x{}?prompt={}&id={}",
            config.image_service_url.trim_end_matches('/'),
            self.width,
            self.height,
            urlencoding::encode(&self.prompt),
            urlencoding::encode(&config.image_request_id),
        )
    }
}
