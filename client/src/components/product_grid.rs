//! Featured product cards.
//!
//! Cards toggle a `hovered` class on pointer enter/leave. Purely cosmetic:
//! the stylesheet already handles `:hover`, this adds a hook for richer
//! transitions once scripting is available.

#[cfg(test)]
#[path = "product_grid_test.rs"]
mod product_grid_test;

use leptos::prelude::*;

use crate::content::Product;

pub(crate) fn card_class(hovered: bool) -> &'static str {
    if hovered { "product-card hovered" } else { "product-card" }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <article
            class=move || card_class(hovered.get())
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <img src=product.image alt=product.name loading="lazy"/>
            <h3>{product.name}</h3>
            <p class="product-card__blurb">{product.blurb}</p>
            <p class="product-card__price">{product.price}</p>
        </article>
    }
}

#[component]
pub fn ProductGrid(products: &'static [Product]) -> impl IntoView {
    view! {
        <div class="product-grid">
            {products.iter().map(|&product| view! { <ProductCard product/> }).collect_view()}
        </div>
    }
}
