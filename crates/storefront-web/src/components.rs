//! UI Components

use leptos::prelude::*;

use crate::product::{ENEM_TURBO, Product};

/// Top navigation bar
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <a href="/" class="brand">{ENEM_TURBO.name}</a>
            <a href="/checkout" class="btn btn-primary">"Comprar"</a>
        </nav>
    }
}

/// Product summary card
#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    view! {
        <div class="product">
            <h2>{product.name}</h2>
            <p>{product.tagline}</p>
            <div class="price">{product.price_label}</div>
        </div>
    }
}
