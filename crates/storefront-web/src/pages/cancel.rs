//! Cancel Page

use leptos::prelude::*;

#[component]
pub fn CancelPage() -> impl IntoView {
    view! {
        <div class="cancel">
            <h1>"Pagamento cancelado"</h1>
            <p>"Nenhuma cobrança foi feita."</p>
            <a href="/checkout" class="btn btn-primary">"Tentar novamente"</a>
        </div>
    }
}
