//! Footer with social links and copyright.

use leptos::prelude::*;

use crate::content;
use crate::util::motion;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer" style=motion::FOOTER.style()>
            <div class="container footer__inner">
                <div class="footer__links">
                    {content::SOCIAL_LINKS
                        .into_iter()
                        .map(|name| view! { <a href="#" class="footer__link hover-float">{name}</a> })
                        .collect_view()}
                </div>
                <p class="footer__copyright">{content::COPYRIGHT}</p>
            </div>
        </footer>
    }
}
