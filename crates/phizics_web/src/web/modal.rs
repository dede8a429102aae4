use leptos::prelude::*;

use phizics::Tip;

/// Hint dialog shown when protected code is modified.
///
/// Clicking the overlay closes it; clicks inside the box do not propagate.
/// Body scrolling is suspended while the dialog is mounted.
#[component]
pub(super) fn TipModal(tip: Tip, on_close: Callback<()>) -> impl IntoView {
    set_body_overflow("hidden");
    on_cleanup(|| set_body_overflow("unset"));

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-container" on:click=|ev| ev.stop_propagation()>
                <div class="modal-box">
                    <div class="modal-content-wrapper">
                        <button class="modal-close" on:click=move |_| on_close.run(())>
                            "✕"
                        </button>
                        <div class="modal-header">
                            <h2>{tip.title}</h2>
                        </div>
                        <div class="modal-body">
                            <p class="modal-message">{tip.message}</p>
                        </div>
                        <div class="modal-footer">
                            <button class="modal-button" on:click=move |_| on_close.run(())>
                                "Entendi!"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", value);
    }
}
