use leptos::prelude::*;

#[component]
pub(super) fn WelcomePage(on_advance: Callback<()>) -> impl IntoView {
    view! {
        <div class="welcome-container">
            <div class="welcome-content">
                <div class="welcome-box">
                    <div class="welcome-text">
                        <p>
                            <strong>
                                "Olá, jovem cientista! Aqui é Albert Frankenstein, bem-vindo ao Phizics!"
                            </strong>
                        </p>
                        <p>
                            "Aqui você vai aprender como a Física funciona dentro do seu \
                             computador. Para jogar é simples: escolha um conceito físico no menu \
                             lateral, observe a simulação de um lado e edite o código do outro. \
                             Alterar valores como massa, velocidade ou ângulo modifica a \
                             experiência imediatamente, permitindo que você veja na prática como \
                             equações viram movimento. Experimente, teste e descubra, o \
                             laboratório é seu!"
                        </p>
                    </div>
                </div>
                <button class="welcome-advance-button" on:click=move |_| on_advance.run(())>
                    "Avançar"
                </button>
            </div>
        </div>
    }
}
