use std::cell::RefCell;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use phizics::{Concept, FrameOutcome, Playground, SurfaceSize, Tip, TipPicker};

use super::canvas::CanvasSurface;
use super::modal::TipModal;

/// The simulation screen: concept sidebar, canvas panel and code panel.
///
/// The [`Playground`] state machine owns all simulation state; signals only
/// mirror what the view needs. An effect restarts the animation loop whenever
/// play state, code or concept changes: it cancels any scheduled frame, runs
/// one synchronously, and schedules a self-rescheduling callback while
/// playing. Paused frames draw once and stop.
#[component]
pub(super) fn PlaygroundPage() -> impl IntoView {
    let runtime = StoredValue::new(Playground::new());

    let (concept, set_concept) = signal(runtime.with_value(|r| r.concept()));
    let (playing, set_playing) = signal(false);
    let (code, set_code) = signal(runtime.with_value(|r| r.code().to_string()));
    let (sidebar_open, set_sidebar_open) = signal(true);
    let (error_message, set_error_message) = signal(String::new());
    let (modal_tip, set_modal_tip) = signal::<Option<Tip>>(None);
    let (raf_id, set_raf_id) = signal::<Option<i32>>(None);

    let canvas_ref = NodeRef::<html::Canvas>::new();
    let tip_picker = Rc::new(RefCell::new(TipPicker::new(js_sys::Date::now() as u64)));
    let frame_loop: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let run_frame: Rc<dyn Fn()> = Rc::new({
        let tip_picker = Rc::clone(&tip_picker);
        move || {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };

            // Keep the bitmap matched to the CSS box.
            let w = canvas.offset_width().max(1) as u32;
            let h = canvas.offset_height().max(1) as u32;
            if canvas.width() != w {
                canvas.set_width(w);
            }
            if canvas.height() != h {
                canvas.set_height(h);
            }

            let mut surface = match CanvasSurface::new(&canvas) {
                Ok(s) => s,
                Err(e) => {
                    log::error!("{e}");
                    return;
                }
            };
            let size = SurfaceSize {
                width: w as f64,
                height: h as f64,
            };

            let mut outcome = FrameOutcome::default();
            runtime.update_value(|r| outcome = r.frame(&mut surface, size));

            let message = runtime.with_value(|r| match r.error() {
                Some(err) => format!("⚠️ {err}"),
                None => String::new(),
            });
            if error_message.get_untracked() != message {
                set_error_message.set(message);
            }

            if outcome.open_modal {
                set_modal_tip.set(Some(tip_picker.borrow_mut().pick()));
            }
        }
    });

    Effect::new({
        let run_frame = Rc::clone(&run_frame);
        let frame_loop = Rc::clone(&frame_loop);
        move |_| {
            let is_playing = playing.get();
            code.track();
            concept.track();
            canvas_ref.track();

            if let Some(id) = raf_id.get_untracked() {
                cancel_frame(id);
                set_raf_id.set(None);
            }

            run_frame();

            if is_playing {
                let cb = {
                    let run_frame = Rc::clone(&run_frame);
                    let frame_loop = Rc::clone(&frame_loop);
                    Closure::wrap(Box::new(move || {
                        run_frame();
                        if playing.get_untracked() {
                            if let Some(cb) = frame_loop.borrow().as_ref() {
                                set_raf_id.set(request_frame(cb));
                            }
                        }
                    }) as Box<dyn FnMut()>)
                };
                *frame_loop.borrow_mut() = Some(cb);
                if let Some(cb) = frame_loop.borrow().as_ref() {
                    set_raf_id.set(request_frame(cb));
                }
            }
        }
    });

    on_cleanup(move || {
        if let Some(id) = raf_id.get_untracked() {
            cancel_frame(id);
        }
    });

    let select_concept = move |c: Concept| {
        runtime.update_value(|r| r.set_concept(c));
        set_concept.set(c);
        set_playing.set(false);
        set_code.set(runtime.with_value(|r| r.code().to_string()));
        set_error_message.set(String::new());
    };

    let do_play = move || {
        runtime.update_value(|r| r.toggle_play());
        set_playing.set(runtime.with_value(|r| r.is_playing()));
    };

    let do_reset = move || {
        runtime.update_value(|r| r.reset());
        set_playing.set(false);
    };

    let do_reset_code = move || {
        runtime.update_value(|r| r.reset_code());
        set_playing.set(false);
        set_code.set(runtime.with_value(|r| r.code().to_string()));
        set_error_message.set(String::new());
    };

    let close_modal = Callback::new(move |_: ()| set_modal_tip.set(None));

    view! {
        <div class="playground-container">
            {move || {
                modal_tip
                    .get()
                    .map(|tip| view! { <TipModal tip=tip on_close=close_modal /> })
            }}

            <aside class=move || {
                if sidebar_open.get() {
                    "playground-sidebar open"
                } else {
                    "playground-sidebar closed"
                }
            }>
                <button
                    class="sidebar-toggle"
                    title=move || {
                        if sidebar_open.get() { "Recolher menu" } else { "Expandir menu" }
                    }
                    on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                >
                    <span></span>
                </button>

                <Show when=move || sidebar_open.get()>
                    <div class="sidebar-header">
                        <h2>"Conceitos"</h2>
                    </div>
                    <nav class="concepts-menu">
                        {Concept::all()
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <button
                                        class=move || {
                                            if concept.get() == c {
                                                "concept-button active"
                                            } else {
                                                "concept-button"
                                            }
                                        }
                                        on:click=move |_| select_concept(c)
                                    >
                                        <span class="concept-icon">{c.icon()}</span>
                                        <span class="concept-name">{c.display_name()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </aside>

            <main class="playground-main">
                <div class="simulation-panel">
                    <div class="panel-header">
                        <h3>"Simulação"</h3>
                        <div class="controls">
                            <button class="control-btn play-btn" on:click=move |_| do_play()>
                                {move || if playing.get() { "⏸️ Pausar" } else { "▶️ Play" }}
                            </button>
                            <button class="control-btn reset-btn" on:click=move |_| do_reset()>
                                "🔄 Reset"
                            </button>
                        </div>
                    </div>
                    <canvas node_ref=canvas_ref class="simulation-canvas"></canvas>
                </div>

                <div class="code-panel">
                    <div class="panel-header">
                        <h3>"Código da Simulação"</h3>
                        <div class="controls">
                            <Show when=move || !error_message.get().is_empty()>
                                <span class="error-badge">{move || error_message.get()}</span>
                            </Show>
                            <button
                                class="control-btn reset-btn"
                                title="Restaurar código original"
                                on:click=move |_| do_reset_code()
                            >
                                "🔄 Resetar Código"
                            </button>
                        </div>
                    </div>
                    <textarea
                        class="code-editor"
                        spellcheck="false"
                        prop:value=move || code.get()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            runtime.update_value(|r| r.set_code(v.clone()));
                            set_code.set(v);
                        }
                    ></textarea>
                </div>
            </main>
        </div>
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let window = web_sys::window()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

fn cancel_frame(id: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.cancel_animation_frame(id);
    }
}
