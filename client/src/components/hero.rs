//! Hero banner with the contact call-to-action.

use leptos::prelude::*;

use crate::content;
use crate::state::site::SiteState;
use crate::util::motion;

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<SiteState>>();

    let on_cta = move |_| ui.update(SiteState::follow_cta);

    view! {
        <section class="hero" style=motion::HERO.style()>
            <div class="container hero__inner">
                <h1 class="hero__title" style=motion::HERO_TITLE.style()>
                    {content::HERO_TITLE}
                </h1>
                <p class="hero__subtitle" style=motion::HERO_SUBTITLE.style()>
                    {content::HERO_SUBTITLE}
                </p>
                <div style=motion::HERO_CTA.style()>
                    <button type="button" class="btn btn--primary btn--lg" on:click=on_cta>
                        {content::HERO_CTA}
                    </button>
                </div>
            </div>
        </section>
    }
}
