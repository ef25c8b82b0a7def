//! About panel: biography, skills and portrait.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content;
use crate::net::images::ImageRequest;
use crate::util::motion;

#[component]
pub fn AboutPanel() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let portrait = ImageRequest::new(content::PORTRAIT_PROMPT, content::PORTRAIT_SIZE, content::PORTRAIT_SIZE);

    view! {
        <div id="panel-about" class="panel panel--about" style=motion::PANEL.style()>
            <div>
                <h2 class="panel__heading" style=motion::ABOUT_HEADING.style()>
                    {content::ABOUT_HEADING}
                </h2>
                <p class="panel__body" style=motion::ABOUT_BODY.style()>
                    {content::ABOUT_BODY}
                </p>
                <div class="skills" style=motion::ABOUT_SKILLS.style()>
                    {content::SKILLS
                        .into_iter()
                        .map(|skill| {
                            view! {
                                <div class="skills__item hover-nudge">
                                    <span>{skill}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="panel__portrait" style=motion::PORTRAIT.style()>
                <img class="portrait" src=portrait.url(&config) alt=content::PORTRAIT_PROMPT/>
            </div>
        </div>
    }
}
