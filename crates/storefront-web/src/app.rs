//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::Nav;
use crate::pages::{CancelPage, CheckoutPage, HomePage, SuccessPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav />
            <main class="app">
                <Routes fallback=|| view! { <p>"Página não encontrada"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/checkout") view=CheckoutPage />
                    <Route path=path!("/success") view=SuccessPage />
                    <Route path=path!("/cancel") view=CancelPage />
                </Routes>
            </main>
        </Router>
    }
}
