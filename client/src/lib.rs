//! # portfolio
//!
//! Leptos + WASM single-page portfolio: nav tabs for About, Products and
//! Contact, a hero banner, and a contact form that hands its draft to a
//! logging sink.
//!
//! All page state lives in [`state::site::SiteState`]. It is plain Rust and
//! is tested on the native target; the `csr` feature adds the browser entry
//! point ([`start`]).

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging, load config, mount the app.
#[cfg(feature = "csr")]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::SiteConfig;

    console_error_panic_hook::set_once();

    let raw = config::embedded_config_json();
    let (config, config_error) = match SiteConfig::load(raw.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    if let Err(e) = console_log::init_with_level(config.log_level()) {
        log::debug!("console logger already installed: {e}");
    }
    if let Some(e) = config_error {
        log::warn!("embedded site config ignored, using defaults: {e}");
    }
    log::info!("mounting portfolio (image service {})", config.image_service_url);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
