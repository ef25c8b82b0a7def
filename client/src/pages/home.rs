//! Landing page: nav, hero, the active section panel, footer.

use leptos::prelude::*;

use crate::components::about_panel::AboutPanel;
use crate::components::contact_panel::ContactPanel;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::products_panel::ProductsPanel;
use crate::state::site::{Section, SiteState};

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<SiteState>>();

    // Memoized so draft keystrokes do not rebuild the panel.
    let active = Memo::new(move |_| ui.with(|s| s.active_section));

    view! {
        <div class="page">
            <NavBar/>
            <Hero/>
            <main class="container main">
                {move || match active.get() {
                    Section::About => view! { <AboutPanel/> }.into_any(),
                    Section::Products => view! { <ProductsPanel/> }.into_any(),
                    Section::Contact => view! { <ContactPanel/> }.into_any(),
                }}
            </main>
            <Footer/>
        </div>
    }
}
