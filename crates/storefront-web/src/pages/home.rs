//! Home Page

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::product::ENEM_TURBO;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>{ENEM_TURBO.name}</h1>
                <p class="tagline">"Prepare-se para o ENEM com foco no que mais cai"</p>
                <div class="cta">
                    <a href="/checkout" class="btn btn-primary">"Quero o meu"</a>
                </div>
            </header>

            <ProductCard product=&ENEM_TURBO />

            <section class="features">
                <div class="feature">
                    <h3>"📘 Conteúdo direto"</h3>
                    <p>"Resumos objetivos de todas as áreas do exame."</p>
                </div>
                <div class="feature">
                    <h3>"✍️ Questões comentadas"</h3>
                    <p>"Resoluções passo a passo das provas anteriores."</p>
                </div>
                <div class="feature">
                    <h3>"⚡ Acesso imediato"</h3>
                    <p>"PDF liberado logo após o pagamento."</p>
                </div>
            </section>
        </div>
    }
}
