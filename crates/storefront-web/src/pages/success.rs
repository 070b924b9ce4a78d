//! Success Page

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let query = use_query_map();
    let session_id = move || query.with(|q| q.get("session_id")).unwrap_or_default();

    view! {
        <div class="success">
            <h1>"Pagamento confirmado"</h1>
            <p>"Obrigado! Você receberá o acesso ao PDF por e-mail."</p>
            <p class="muted">"Sessão: " {session_id}</p>
            <a href="/" class="btn">"Voltar ao início"</a>
        </div>
    }
}
