//! Fixed top navigation with one tab per section.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::content;
use crate::state::site::{Section, SiteState};
use crate::util::motion;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<SiteState>>();

    view! {
        <nav class="nav" style=motion::NAV.style()>
            <div class="container nav__inner">
                <div class="nav__brand hover-grow">{content::OWNER_NAME}</div>
                <div class="nav__tabs">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    type="button"
                                    class=move || tab_class(ui.with(|s| s.is_visible(section)))
                                    attr:data-section=section.key()
                                    on:click=move |_| ui.update(|s| s.select_section(section))
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "nav__tab nav__tab--active hover-pop" } else { "nav__tab hover-pop" }
}
