//! Contact panel: controlled form bound to the draft, plus direct contact
//! details.
//!
//! ERROR HANDLING
//! ==============
//! Submission always clears the form. A sink failure is logged and otherwise
//! ignored, matching the permissive form behavior.

use std::sync::Arc;

use leptos::prelude::*;

use crate::content;
use crate::net::contact::ContactSink;
use crate::state::site::{ContactField, SiteState};
use crate::util::motion;

#[component]
pub fn ContactPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<SiteState>>();
    let sink = expect_context::<Arc<dyn ContactSink>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ui.update(|s| {
            if let Err(e) = s.submit(sink.as_ref()) {
                log::warn!("contact submission failed: {e}");
            }
        });
    };

    view! {
        <div id="panel-contact" class="panel panel--contact" style=motion::PANEL.style()>
            <h2 class="panel__heading panel__heading--center" style=motion::SECTION_HEADING.style()>
                {content::CONTACT_HEADING}
            </h2>
            <div class="card">
                <header class="card__header">
                    <h3 class="card__title">{content::CONTACT_CARD_TITLE}</h3>
                    <p class="card__description">{content::CONTACT_CARD_SUBTITLE}</p>
                </header>
                <div class="card__content">
                    <form class="contact-form" on:submit=on_submit>
                        {ContactField::ALL.into_iter().map(|field| view! { <DraftField field=field/> }).collect_view()}
                        <div class="hover-press">
                            <button type="submit" class="btn btn--primary btn--block">
                                {content::SUBMIT_LABEL}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
            <div class="direct-contact" style=motion::DIRECT_CONTACT.style()>
                <h3 class="direct-contact__heading">{content::DIRECT_CONTACT_HEADING}</h3>
                <div class="direct-contact__lines">
                    {content::DIRECT_CONTACT_LINES.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Labelled control bound to one draft field. The message gets a textarea.
#[component]
fn DraftField(field: ContactField) -> impl IntoView {
    let ui = expect_context::<RwSignal<SiteState>>();
    let value = move || ui.with(|s| s.draft.get(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| ui.update(|s| s.update_field(field, event_target_value(&ev)));

    let control = match field.input_type() {
        Some(input_type) => view! {
            <input
                id=field.key()
                name=field.key()
                type=input_type
                class="field__input"
                required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        None => view! {
            <textarea
                id=field.key()
                name=field.key()
                class="field__input"
                rows=content::MESSAGE_ROWS
                required
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <div class="field">
            <label class="field__label" for=field.key()>
                {field.label()}
            </label>
            {control}
        </div>
    }
}
