//! Checkout Page

use leptos::prelude::*;

use crate::api::{self, CheckoutRequest};
use crate::components::ProductCard;
use crate::product::ENEM_TURBO;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (quantity, set_quantity) = signal(1u64);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let submit = move |_| {
        if loading.get() {
            return;
        }

        let request = CheckoutRequest {
            product_name: ENEM_TURBO.name.into(),
            price: ENEM_TURBO.price.into(),
            quantity: quantity.get(),
            email: email.get(),
        };

        set_error.set(None);
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            match api::create_checkout(&request).await {
                Ok(url) => {
                    let outcome = web_sys::window().map(|window| window.location().set_href(&url));
                    if let Some(e) = api::redirect_error(outcome) {
                        set_error.set(Some(e));
                        set_loading.set(false);
                    }
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="checkout">
            <h1>"Finalizar compra"</h1>
            <ProductCard product=&ENEM_TURBO />

            <div class="field">
                <label>"E-mail"</label>
                <input
                    type="email"
                    placeholder="voce@exemplo.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>

            <div class="field">
                <label>"Quantidade"</label>
                <input
                    type="number"
                    min="1"
                    prop:value=move || quantity.get().to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse::<u64>().unwrap_or(1).max(1);
                        set_quantity.set(value);
                    }
                />
            </div>

            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <button class="btn btn-primary" on:click=submit disabled=move || loading.get()>
                {move || if loading.get() { "Redirecionando..." } else { "Pagar com cartão" }}
            </button>
        </div>
    }
}
