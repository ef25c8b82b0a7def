//! Root application component and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::content;
use crate::net::contact::{ContactSink, LogSink};
use crate::pages::home::HomePage;
use crate::state::site::SiteState;

/// Root application component.
///
/// Owns the page state for this mount and provides it, the config and the
/// contact sink to child components.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let site = RwSignal::new(SiteState::default());
    let sink: Arc<dyn ContactSink> = Arc::new(LogSink);

    provide_context(site);
    provide_context(config);
    provide_context(sink);

    view! {
        <Title text=content::PAGE_TITLE/>
        <Meta name="description" content=content::HERO_SUBTITLE/>
        <HomePage/>
    }
}
