//! Products panel: one card per catalog entry.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content;
use crate::net::images::ImageRequest;
use crate::state::catalog::{self, Product};
use crate::state::site::SiteState;
use crate::util::motion;

#[component]
pub fn ProductsPanel() -> impl IntoView {
    view! {
        <div id="panel-products" class="panel panel--products" style=motion::PANEL.style()>
            <h2 class="panel__heading panel__heading--center" style=motion::SECTION_HEADING.style()>
                {content::PRODUCTS_HEADING}
            </h2>
            <div class="products">
                {catalog::products()
                    .iter()
                    .enumerate()
                    .map(|(index, product)| view! { <ProductCard product=*product index=index/> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Card for a single product. The buy button opens the contact panel.
#[component]
fn ProductCard(product: Product, index: usize) -> impl IntoView {
    let ui = expect_context::<RwSignal<SiteState>>();
    let config = expect_context::<SiteConfig>();
    let image = ImageRequest::new(
        product.image_prompt(),
        content::PRODUCT_IMAGE_WIDTH,
        content::PRODUCT_IMAGE_HEIGHT,
    );

    view! {
        <div class="hover-lift" style=motion::product_card(index).style()>
            <article class="card card--product" attr:data-product-id=product.id.to_string()>
                <header class="card__header">
                    <h3 class="card__title">{product.title}</h3>
                    <p class="card__description">{product.description}</p>
                </header>
                <div class="card__content">
                    <img class="card__image" src=image.url(&config) alt=product.image_alt()/>
                </div>
                <footer class="card__footer">
                    <span class="card__price">{product.price}</span>
                    <button
                        type="button"
                        class="btn btn--primary"
                        on:click=move |_| ui.update(SiteState::follow_cta)
                    >
                        {content::BUY_LABEL}
                    </button>
                </footer>
            </article>
        </div>
    }
}
