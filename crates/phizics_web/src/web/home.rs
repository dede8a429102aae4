use leptos::prelude::*;

#[component]
pub(super) fn HomePage(on_advance: Callback<()>) -> impl IntoView {
    view! {
        <div class="home-container">
            <div class="home-content">
                <h1 class="home-title">"Física Interativa"</h1>
                <button
                    class="home-start-button"
                    aria-label="Iniciar experiência"
                    on:click=move |_| on_advance.run(())
                >
                    "Iniciar"
                </button>
            </div>
        </div>
    }
}
